// Videl timing table, one entry per supported mode word
use crate::components::Word;

/// Register values programmed for one Videl mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoModeEntry {
    pub vmode: Word,
    /// Horizontal hold timer, border begin and end, display begin and end, sync start.
    pub hht: u16,
    pub hbb: u16,
    pub hbe: u16,
    pub hdb: u16,
    pub hde: u16,
    pub hss: u16,
    /// Vertical frequency timer and the vertical counterparts, in half lines.
    pub vft: u16,
    pub vbb: u16,
    pub vbe: u16,
    pub vdb: u16,
    pub vde: u16,
    pub vss: u16,
    /// Scanline width in words.
    pub width: u16,
    /// Video control: bit 0 doubles lines, bit 1 selects interlace.
    pub ctl: u16,
}

impl VideoModeEntry {
    /// Visible lines, allowing for interlace and line doubling.
    pub fn visible_lines(&self) -> u16 {
        let mut lines = self.vde.wrapping_sub(self.vdb);
        if self.ctl & 0x02 == 0 {
            lines >>= 1;
        }
        if self.ctl & 0x01 != 0 {
            lines >>= 1;
        }
        lines
    }
}

pub fn lookup_mode(mode: Word) -> Option<&'static VideoModeEntry> {
    VIDEO_MODES.iter().find(|entry| entry.vmode == mode)
}

pub static VIDEO_MODES: [VideoModeEntry; 95] = [
    VideoModeEntry { vmode: 0x0011, hht: 0x0017, hbb: 0x0012, hbe: 0x0001, hdb: 0x020a, hde: 0x0009, hss: 0x0011, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x0028, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x0012, hht: 0x00c6, hbb: 0x008d, hbe: 0x0015, hdb: 0x028a, hde: 0x006b, hss: 0x0096, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x0050, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x0013, hht: 0x00c6, hbb: 0x008d, hbe: 0x0015, hdb: 0x029a, hde: 0x007b, hss: 0x0096, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x00a0, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x0014, hht: 0x00c6, hbb: 0x008d, hbe: 0x0015, hdb: 0x02ac, hde: 0x0091, hss: 0x0096, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x0140, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x0018, hht: 0x00c6, hbb: 0x008d, hbe: 0x0015, hdb: 0x0273, hde: 0x0050, hss: 0x0096, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x0028, ctl: 0x0008 },
    VideoModeEntry { vmode: 0x0019, hht: 0x0017, hbb: 0x0012, hbe: 0x0001, hdb: 0x020e, hde: 0x000d, hss: 0x0011, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x0050, ctl: 0x0008 },
    VideoModeEntry { vmode: 0x001a, hht: 0x00c6, hbb: 0x008d, hbe: 0x0015, hdb: 0x02a3, hde: 0x007c, hss: 0x0096, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x00a0, ctl: 0x0008 },
    VideoModeEntry { vmode: 0x001b, hht: 0x00c6, hbb: 0x008d, hbe: 0x0015, hdb: 0x02ab, hde: 0x0084, hss: 0x0096, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x0140, ctl: 0x0008 },
    VideoModeEntry { vmode: 0x0098, hht: 0x00c6, hbb: 0x008d, hbe: 0x0015, hdb: 0x0273, hde: 0x0050, hss: 0x0096, vft: 0x0419, vbb: 0x03af, vbe: 0x008f, vdb: 0x008f, vde: 0x03af, vss: 0x0415, width: 0x0028, ctl: 0x0008 },
    VideoModeEntry { vmode: 0x0111, hht: 0x0017, hbb: 0x0012, hbe: 0x0001, hdb: 0x020a, hde: 0x0009, hss: 0x0011, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x0028, ctl: 0x0005 },
    VideoModeEntry { vmode: 0x0112, hht: 0x00c6, hbb: 0x008d, hbe: 0x0015, hdb: 0x028a, hde: 0x006b, hss: 0x0096, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x0050, ctl: 0x0005 },
    VideoModeEntry { vmode: 0x0113, hht: 0x00c6, hbb: 0x008d, hbe: 0x0015, hdb: 0x029a, hde: 0x007b, hss: 0x0096, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x00a0, ctl: 0x0005 },
    VideoModeEntry { vmode: 0x0114, hht: 0x00c6, hbb: 0x008d, hbe: 0x0015, hdb: 0x02ac, hde: 0x0091, hss: 0x0096, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x0140, ctl: 0x0005 },
    VideoModeEntry { vmode: 0x0118, hht: 0x00c6, hbb: 0x008d, hbe: 0x0015, hdb: 0x0273, hde: 0x0050, hss: 0x0096, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x0028, ctl: 0x0009 },
    VideoModeEntry { vmode: 0x0119, hht: 0x0017, hbb: 0x0012, hbe: 0x0001, hdb: 0x020e, hde: 0x000d, hss: 0x0011, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x0050, ctl: 0x0009 },
    VideoModeEntry { vmode: 0x011a, hht: 0x00c6, hbb: 0x008d, hbe: 0x0015, hdb: 0x02a3, hde: 0x007c, hss: 0x0096, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x00a0, ctl: 0x0009 },
    VideoModeEntry { vmode: 0x011b, hht: 0x00c6, hbb: 0x008d, hbe: 0x0015, hdb: 0x02ab, hde: 0x0084, hss: 0x0096, vft: 0x0419, vbb: 0x03ff, vbe: 0x003f, vdb: 0x003f, vde: 0x03ff, vss: 0x0415, width: 0x0140, ctl: 0x0009 },
    VideoModeEntry { vmode: 0x0192, hht: 0x0017, hbb: 0x0012, hbe: 0x0001, hdb: 0x020e, hde: 0x000d, hss: 0x0011, vft: 0x0419, vbb: 0x03af, vbe: 0x008f, vdb: 0x008f, vde: 0x03af, vss: 0x0415, width: 0x0050, ctl: 0x0005 },
    VideoModeEntry { vmode: 0x0199, hht: 0x0017, hbb: 0x0012, hbe: 0x0001, hdb: 0x020e, hde: 0x000d, hss: 0x0011, vft: 0x0419, vbb: 0x03af, vbe: 0x008f, vdb: 0x008f, vde: 0x03af, vss: 0x0415, width: 0x0050, ctl: 0x0009 },
    VideoModeEntry { vmode: 0x0001, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x0239, hde: 0x0012, hss: 0x0034, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x004d, vde: 0x01dd, vss: 0x0207, width: 0x0028, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0002, hht: 0x00fe, hbb: 0x00c9, hbe: 0x0027, hdb: 0x000c, hde: 0x006d, hss: 0x00d8, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x004d, vde: 0x01dd, vss: 0x0207, width: 0x0050, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0003, hht: 0x00fe, hbb: 0x00c9, hbe: 0x0027, hdb: 0x001c, hde: 0x007d, hss: 0x00d8, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x004d, vde: 0x01dd, vss: 0x0207, width: 0x00a0, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0004, hht: 0x00fe, hbb: 0x00c9, hbe: 0x0027, hdb: 0x002e, hde: 0x008f, hss: 0x00d8, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x004d, vde: 0x01dd, vss: 0x0207, width: 0x0140, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0008, hht: 0x01ff, hbb: 0x0197, hbe: 0x0050, hdb: 0x03f0, hde: 0x009f, hss: 0x01b4, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x004d, vde: 0x01dd, vss: 0x0207, width: 0x0028, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x0009, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x0002, hde: 0x0020, hss: 0x0034, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x004d, vde: 0x01dd, vss: 0x0207, width: 0x0050, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x000a, hht: 0x01ff, hbb: 0x0197, hbe: 0x0050, hdb: 0x004d, hde: 0x00fd, hss: 0x01b4, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x004d, vde: 0x01dd, vss: 0x0207, width: 0x00a0, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x000b, hht: 0x01ff, hbb: 0x0197, hbe: 0x0050, hdb: 0x005d, hde: 0x010d, hss: 0x01b4, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x004d, vde: 0x01dd, vss: 0x0207, width: 0x0140, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x0021, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x0239, hde: 0x0012, hss: 0x0034, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x007f, vde: 0x020f, vss: 0x026b, width: 0x0028, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0022, hht: 0x00fe, hbb: 0x00cb, hbe: 0x0027, hdb: 0x000c, hde: 0x006d, hss: 0x00d8, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x007f, vde: 0x020f, vss: 0x026b, width: 0x0050, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0023, hht: 0x00fe, hbb: 0x00cb, hbe: 0x0027, hdb: 0x001c, hde: 0x007d, hss: 0x00d8, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x007f, vde: 0x020f, vss: 0x026b, width: 0x00a0, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0024, hht: 0x00fe, hbb: 0x00cb, hbe: 0x0027, hdb: 0x002e, hde: 0x008f, hss: 0x00d8, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x007f, vde: 0x020f, vss: 0x026b, width: 0x0140, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0028, hht: 0x01fe, hbb: 0x0199, hbe: 0x0050, hdb: 0x03ef, hde: 0x00a0, hss: 0x01b2, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x007f, vde: 0x020f, vss: 0x026b, width: 0x0028, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x0029, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x0002, hde: 0x0020, hss: 0x0034, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x007f, vde: 0x020f, vss: 0x026b, width: 0x0050, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x002a, hht: 0x01fe, hbb: 0x0199, hbe: 0x0050, hdb: 0x004d, hde: 0x00fe, hss: 0x01b2, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x007f, vde: 0x020f, vss: 0x026b, width: 0x00a0, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x002b, hht: 0x01fe, hbb: 0x0199, hbe: 0x0050, hdb: 0x005d, hde: 0x010e, hss: 0x01b2, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x007f, vde: 0x020f, vss: 0x026b, width: 0x0140, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x0041, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x0239, hde: 0x0012, hss: 0x0034, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x0025, vde: 0x0205, vss: 0x0207, width: 0x0030, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0042, hht: 0x00fe, hbb: 0x00c9, hbe: 0x0027, hdb: 0x000c, hde: 0x006d, hss: 0x00d8, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x0025, vde: 0x0205, vss: 0x0207, width: 0x0060, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0043, hht: 0x00fe, hbb: 0x00c9, hbe: 0x0027, hdb: 0x001c, hde: 0x007d, hss: 0x00d8, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x0025, vde: 0x0205, vss: 0x0207, width: 0x00c0, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0044, hht: 0x00fe, hbb: 0x00c9, hbe: 0x0027, hdb: 0x002e, hde: 0x008f, hss: 0x00d8, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x0025, vde: 0x0205, vss: 0x0207, width: 0x0180, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0048, hht: 0x01ff, hbb: 0x0197, hbe: 0x0050, hdb: 0x03f0, hde: 0x009f, hss: 0x01b4, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x0025, vde: 0x0205, vss: 0x0207, width: 0x0030, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x0049, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x023b, hde: 0x001c, hss: 0x0034, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x0025, vde: 0x0205, vss: 0x0207, width: 0x0060, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x004a, hht: 0x01ff, hbb: 0x0197, hbe: 0x0050, hdb: 0x004d, hde: 0x00fd, hss: 0x01b4, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x0025, vde: 0x0205, vss: 0x0207, width: 0x00c0, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x004b, hht: 0x01ff, hbb: 0x0197, hbe: 0x0050, hdb: 0x005d, hde: 0x010d, hss: 0x01b4, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x0025, vde: 0x0205, vss: 0x0207, width: 0x0180, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x0061, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x0239, hde: 0x0012, hss: 0x0034, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x0057, vde: 0x0237, vss: 0x026b, width: 0x0030, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0062, hht: 0x00fe, hbb: 0x00cb, hbe: 0x0027, hdb: 0x000c, hde: 0x006d, hss: 0x00d8, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x0057, vde: 0x0237, vss: 0x026b, width: 0x0060, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0063, hht: 0x00fe, hbb: 0x00cb, hbe: 0x0027, hdb: 0x001c, hde: 0x007d, hss: 0x00d8, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x0057, vde: 0x0237, vss: 0x026b, width: 0x00c0, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0064, hht: 0x00fe, hbb: 0x00cb, hbe: 0x0027, hdb: 0x002e, hde: 0x008f, hss: 0x00d8, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x0057, vde: 0x0237, vss: 0x026b, width: 0x0180, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0068, hht: 0x01fe, hbb: 0x0199, hbe: 0x0050, hdb: 0x03ef, hde: 0x00a0, hss: 0x01b2, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x0057, vde: 0x0237, vss: 0x026b, width: 0x0030, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x0069, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x023b, hde: 0x001c, hss: 0x0034, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x0057, vde: 0x0237, vss: 0x026b, width: 0x0060, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x006a, hht: 0x01fe, hbb: 0x0199, hbe: 0x0050, hdb: 0x004d, hde: 0x00fe, hss: 0x01b2, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x0057, vde: 0x0237, vss: 0x026b, width: 0x00c0, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x006b, hht: 0x01fe, hbb: 0x0199, hbe: 0x0050, hdb: 0x005d, hde: 0x010e, hss: 0x01b2, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x0057, vde: 0x0237, vss: 0x026b, width: 0x0180, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x0088, hht: 0x01ff, hbb: 0x0197, hbe: 0x0050, hdb: 0x03f0, hde: 0x009f, hss: 0x01b4, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x004d, vde: 0x01dd, vss: 0x0207, width: 0x0028, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x00a8, hht: 0x01fe, hbb: 0x0199, hbe: 0x0050, hdb: 0x03ef, hde: 0x00a0, hss: 0x01b2, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x007f, vde: 0x020f, vss: 0x026b, width: 0x0028, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x00c8, hht: 0x01ff, hbb: 0x0197, hbe: 0x0050, hdb: 0x03f0, hde: 0x009f, hss: 0x01b4, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x0025, vde: 0x0205, vss: 0x0207, width: 0x0030, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x00e8, hht: 0x01fe, hbb: 0x0199, hbe: 0x0050, hdb: 0x03ef, hde: 0x00a0, hss: 0x01b2, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x0057, vde: 0x0237, vss: 0x026b, width: 0x0030, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x0101, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x0239, hde: 0x0012, hss: 0x0034, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x004c, vde: 0x01dc, vss: 0x0207, width: 0x0028, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0102, hht: 0x00fe, hbb: 0x00c9, hbe: 0x0027, hdb: 0x000c, hde: 0x006d, hss: 0x00d8, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x004c, vde: 0x01dc, vss: 0x0207, width: 0x0050, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0103, hht: 0x00fe, hbb: 0x00c9, hbe: 0x0027, hdb: 0x001c, hde: 0x007d, hss: 0x00d8, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x004c, vde: 0x01dc, vss: 0x0207, width: 0x00a0, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0104, hht: 0x00fe, hbb: 0x00c9, hbe: 0x0027, hdb: 0x002e, hde: 0x008f, hss: 0x00d8, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x004c, vde: 0x01dc, vss: 0x0207, width: 0x0140, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0108, hht: 0x01ff, hbb: 0x0197, hbe: 0x0050, hdb: 0x03f0, hde: 0x009f, hss: 0x01b4, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x004c, vde: 0x01dc, vss: 0x0207, width: 0x0028, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x0109, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x0002, hde: 0x0020, hss: 0x0034, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x004c, vde: 0x01dc, vss: 0x0207, width: 0x0050, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x010a, hht: 0x01ff, hbb: 0x0197, hbe: 0x0050, hdb: 0x004d, hde: 0x00fd, hss: 0x01b4, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x004c, vde: 0x01dc, vss: 0x0207, width: 0x00a0, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x010b, hht: 0x01ff, hbb: 0x0197, hbe: 0x0050, hdb: 0x005d, hde: 0x010d, hss: 0x01b4, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x004c, vde: 0x01dc, vss: 0x0207, width: 0x0140, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x0121, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x0239, hde: 0x0012, hss: 0x0034, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x007e, vde: 0x020e, vss: 0x026b, width: 0x0028, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0122, hht: 0x00fe, hbb: 0x00cb, hbe: 0x0027, hdb: 0x000c, hde: 0x006d, hss: 0x00d8, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x007e, vde: 0x020e, vss: 0x026b, width: 0x0050, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0123, hht: 0x00fe, hbb: 0x00cb, hbe: 0x0027, hdb: 0x001c, hde: 0x007d, hss: 0x00d8, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x007e, vde: 0x020e, vss: 0x026b, width: 0x00a0, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0124, hht: 0x00fe, hbb: 0x00cb, hbe: 0x0027, hdb: 0x002e, hde: 0x008f, hss: 0x00d8, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x007e, vde: 0x020e, vss: 0x026b, width: 0x0140, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0128, hht: 0x01fe, hbb: 0x0199, hbe: 0x0050, hdb: 0x03ef, hde: 0x00a0, hss: 0x01b2, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x007e, vde: 0x020e, vss: 0x026b, width: 0x0028, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x0129, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x0002, hde: 0x0020, hss: 0x0034, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x007e, vde: 0x020e, vss: 0x026b, width: 0x0050, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x012a, hht: 0x01fe, hbb: 0x0199, hbe: 0x0050, hdb: 0x004d, hde: 0x00fe, hss: 0x01b2, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x007e, vde: 0x020e, vss: 0x026b, width: 0x00a0, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x012b, hht: 0x01fe, hbb: 0x0199, hbe: 0x0050, hdb: 0x005d, hde: 0x010e, hss: 0x01b2, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x007e, vde: 0x020e, vss: 0x026b, width: 0x0140, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x0141, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x0239, hde: 0x0012, hss: 0x0034, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x0024, vde: 0x0204, vss: 0x0207, width: 0x0030, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0142, hht: 0x00fe, hbb: 0x00c9, hbe: 0x0027, hdb: 0x000c, hde: 0x006d, hss: 0x00d8, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x0024, vde: 0x0204, vss: 0x0207, width: 0x0060, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0143, hht: 0x00fe, hbb: 0x00c9, hbe: 0x0027, hdb: 0x001c, hde: 0x007d, hss: 0x00d8, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x0024, vde: 0x0204, vss: 0x0207, width: 0x00c0, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0144, hht: 0x00fe, hbb: 0x00c9, hbe: 0x0027, hdb: 0x002e, hde: 0x008f, hss: 0x00d8, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x0024, vde: 0x0204, vss: 0x0207, width: 0x0180, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0148, hht: 0x01ff, hbb: 0x0197, hbe: 0x0050, hdb: 0x03f0, hde: 0x009f, hss: 0x01b4, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x0024, vde: 0x0204, vss: 0x0207, width: 0x0030, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x0149, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x023b, hde: 0x001c, hss: 0x0034, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x0024, vde: 0x0204, vss: 0x0207, width: 0x0060, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x014a, hht: 0x01ff, hbb: 0x0197, hbe: 0x0050, hdb: 0x004d, hde: 0x00fd, hss: 0x01b4, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x0024, vde: 0x0204, vss: 0x0207, width: 0x00c0, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x014b, hht: 0x01ff, hbb: 0x0197, hbe: 0x0050, hdb: 0x005d, hde: 0x010d, hss: 0x01b4, vft: 0x020c, vbb: 0x0201, vbe: 0x0016, vdb: 0x0024, vde: 0x0204, vss: 0x0207, width: 0x0180, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x0161, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x0239, hde: 0x0012, hss: 0x0034, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x0056, vde: 0x0236, vss: 0x026b, width: 0x0030, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0162, hht: 0x00fe, hbb: 0x00cb, hbe: 0x0027, hdb: 0x000c, hde: 0x006d, hss: 0x00d8, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x0056, vde: 0x0236, vss: 0x026b, width: 0x0060, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0163, hht: 0x00fe, hbb: 0x00cb, hbe: 0x0027, hdb: 0x001c, hde: 0x007d, hss: 0x00d8, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x0056, vde: 0x0236, vss: 0x026b, width: 0x00c0, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0164, hht: 0x00fe, hbb: 0x00cb, hbe: 0x0027, hdb: 0x002e, hde: 0x008f, hss: 0x00d8, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x0056, vde: 0x0236, vss: 0x026b, width: 0x0180, ctl: 0x0002 },
    VideoModeEntry { vmode: 0x0168, hht: 0x01fe, hbb: 0x0199, hbe: 0x0050, hdb: 0x03ef, hde: 0x00a0, hss: 0x01b2, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x0056, vde: 0x0236, vss: 0x026b, width: 0x0030, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x0169, hht: 0x003e, hbb: 0x0030, hbe: 0x0008, hdb: 0x023b, hde: 0x001c, hss: 0x0034, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x0056, vde: 0x0236, vss: 0x026b, width: 0x0060, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x016a, hht: 0x01fe, hbb: 0x0199, hbe: 0x0050, hdb: 0x004d, hde: 0x00fe, hss: 0x01b2, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x0056, vde: 0x0236, vss: 0x026b, width: 0x00c0, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x016b, hht: 0x01fe, hbb: 0x0199, hbe: 0x0050, hdb: 0x005d, hde: 0x010e, hss: 0x01b2, vft: 0x0270, vbb: 0x0265, vbe: 0x002f, vdb: 0x0056, vde: 0x0236, vss: 0x026b, width: 0x0180, ctl: 0x0006 },
    VideoModeEntry { vmode: 0x0182, hht: 0x003e, hbb: 0x0032, hbe: 0x0009, hdb: 0x023f, hde: 0x001c, hss: 0x0034, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x004d, vde: 0x01dd, vss: 0x0207, width: 0x0050, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x0189, hht: 0x003e, hbb: 0x0032, hbe: 0x0009, hdb: 0x023f, hde: 0x001c, hss: 0x0034, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x004d, vde: 0x01dd, vss: 0x0207, width: 0x0050, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x01a2, hht: 0x003e, hbb: 0x0032, hbe: 0x0009, hdb: 0x023f, hde: 0x001c, hss: 0x0034, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x006f, vde: 0x01ff, vss: 0x026b, width: 0x0050, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x01a9, hht: 0x003e, hbb: 0x0032, hbe: 0x0009, hdb: 0x023f, hde: 0x001c, hss: 0x0034, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x006f, vde: 0x01ff, vss: 0x026b, width: 0x0050, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x01c2, hht: 0x003e, hbb: 0x0032, hbe: 0x0009, hdb: 0x023f, hde: 0x001c, hss: 0x0034, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x004d, vde: 0x01dd, vss: 0x0207, width: 0x0050, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x01c9, hht: 0x003e, hbb: 0x0032, hbe: 0x0009, hdb: 0x023f, hde: 0x001c, hss: 0x0034, vft: 0x020d, vbb: 0x0201, vbe: 0x0016, vdb: 0x004d, vde: 0x01dd, vss: 0x0207, width: 0x0060, ctl: 0x0004 },
    VideoModeEntry { vmode: 0x01e2, hht: 0x003e, hbb: 0x0032, hbe: 0x0009, hdb: 0x023f, hde: 0x001c, hss: 0x0034, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x006f, vde: 0x01ff, vss: 0x026b, width: 0x0050, ctl: 0x0000 },
    VideoModeEntry { vmode: 0x01e9, hht: 0x003e, hbb: 0x0032, hbe: 0x0009, hdb: 0x023f, hde: 0x001c, hss: 0x0034, vft: 0x0271, vbb: 0x0265, vbe: 0x002f, vdb: 0x006f, vde: 0x01ff, vss: 0x026b, width: 0x0060, ctl: 0x0004 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::video::{FALCON_DEFAULT_BOOT, FALCON_ST_HIGH, FALCON_ST_MEDIUM};

    #[test]
    fn boot_modes_are_in_the_table() {
        for mode in [FALCON_DEFAULT_BOOT, FALCON_ST_HIGH, FALCON_ST_MEDIUM] {
            assert!(lookup_mode(mode).is_some(), "mode {:04x}", mode);
        }
    }

    #[test]
    fn unknown_modes_are_rejected() {
        assert!(lookup_mode(0x0000).is_none());
        assert!(lookup_mode(0x7fff).is_none());
        assert!(lookup_mode(-1).is_none());
    }

    #[test]
    fn entries_are_unique() {
        for (i, entry) in VIDEO_MODES.iter().enumerate() {
            assert!(VIDEO_MODES[i + 1..].iter().all(|other| other.vmode != entry.vmode));
        }
    }

    #[test]
    fn default_boot_mode_has_400_lines() {
        let entry = lookup_mode(FALCON_DEFAULT_BOOT).unwrap();
        assert_eq!(entry.width, 160);
        assert_eq!(entry.visible_lines(), 400);
    }
}

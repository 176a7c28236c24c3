//! Control and status register names.

/// Returns the name of a CSR by its 12-bit number.
///
/// Unprivileged, supervisor, hypervisor, machine and debug registers are
/// known. Anything else gives `None`.
pub fn name(csr: u32) -> Option<&'static str> {
    let name = match csr {
        0x000 => "ustatus",
        0x001 => "fflags",
        0x002 => "frm",
        0x003 => "fcsr",
        0x004 => "uie",
        0x005 => "utvec",
        0x007 => "utvt",
        0x008 => "vstart",
        0x009 => "vxsat",
        0x00a => "vxrm",
        0x00f => "vcsr",
        0x040 => "uscratch",
        0x041 => "uepc",
        0x042 => "ucause",
        0x043 => "utval",
        0x044 => "uip",
        0x045 => "unxti",
        0x046 => "uintstatus",
        0x048 => "uscratchcsw",
        0x049 => "uscratchcswl",
        0x100 => "sstatus",
        0x102 => "sedeleg",
        0x103 => "sideleg",
        0x104 => "sie",
        0x105 => "stvec",
        0x106 => "scounteren",
        0x107 => "stvt",
        0x140 => "sscratch",
        0x141 => "sepc",
        0x142 => "scause",
        0x143 => "stval",
        0x144 => "sip",
        0x145 => "snxti",
        0x146 => "sintstatus",
        0x148 => "sscratchcsw",
        0x149 => "sscratchcswl",
        0x180 => "satp",
        0x200 => "vsstatus",
        0x204 => "vsie",
        0x205 => "vstvec",
        0x240 => "vsscratch",
        0x241 => "vsepc",
        0x242 => "vscause",
        0x243 => "vstval",
        0x244 => "vsip",
        0x280 => "vsatp",
        0x300 => "mstatus",
        0x301 => "misa",
        0x302 => "medeleg",
        0x303 => "mideleg",
        0x304 => "mie",
        0x305 => "mtvec",
        0x306 => "mcounteren",
        0x307 => "mtvt",
        0x310 => "mstatush",
        0x320 => "mcountinhibit",
        0x340 => "mscratch",
        0x341 => "mepc",
        0x342 => "mcause",
        0x343 => "mtval",
        0x344 => "mip",
        0x345 => "mnxti",
        0x346 => "mintstatus",
        0x348 => "mscratchcsw",
        0x349 => "mscratchcswl",
        0x34a => "mtinst",
        0x34b => "mtval2",
        0x600 => "hstatus",
        0x602 => "hedeleg",
        0x603 => "hideleg",
        0x604 => "hie",
        0x605 => "htimedelta",
        0x606 => "hcounteren",
        0x607 => "hgeie",
        0x615 => "htimedeltah",
        0x643 => "htval",
        0x644 => "hip",
        0x645 => "hvip",
        0x64a => "htinst",
        0x680 => "hgatp",
        0x7a0 => "tselect",
        0x7a1 => "tdata1",
        0x7a2 => "tdata2",
        0x7a3 => "tdata3",
        0x7a4 => "tinfo",
        0x7a5 => "tcontrol",
        0x7a8 => "mcontext",
        0x7a9 => "mnoise",
        0x7aa => "scontext",
        0x7b0 => "dcsr",
        0x7b1 => "dpc",
        0x7b2 => "dscratch0",
        0x7b3 => "dscratch1",
        0xb00 => "mcycle",
        0xb02 => "minstret",
        0xb80 => "mcycleh",
        0xb82 => "minstreth",
        0xc00 => "cycle",
        0xc01 => "time",
        0xc02 => "instret",
        0xc20 => "vl",
        0xc21 => "vtype",
        0xc22 => "vlenb",
        0xc80 => "cycleh",
        0xc81 => "timeh",
        0xc82 => "instreth",
        0xe12 => "hgeip",
        0xf11 => "mvendorid",
        0xf12 => "marchid",
        0xf13 => "mimpid",
        0xf14 => "mhartid",
        0xf15 => "mentropy",
        0x323..=0x33f => MHPMEVENT[(csr - 0x323) as usize],
        0x3a0..=0x3a3 => PMPCFG[(csr - 0x3a0) as usize],
        0x3b0..=0x3bf => PMPADDR[(csr - 0x3b0) as usize],
        0xb03..=0xb1f => MHPMCOUNTER[(csr - 0xb03) as usize],
        0xb83..=0xb9f => MHPMCOUNTERH[(csr - 0xb83) as usize],
        0xc03..=0xc1f => HPMCOUNTER[(csr - 0xc03) as usize],
        0xc83..=0xc9f => HPMCOUNTERH[(csr - 0xc83) as usize],
        _ => return None,
    };
    Some(name)
}

// Numbered families, starting at their first assigned index.

static MHPMEVENT: [&str; 29] = [
    "mhpmevent3",
    "mhpmevent4",
    "mhpmevent5",
    "mhpmevent6",
    "mhpmevent7",
    "mhpmevent8",
    "mhpmevent9",
    "mhpmevent10",
    "mhpmevent11",
    "mhpmevent12",
    "mhpmevent13",
    "mhpmevent14",
    "mhpmevent15",
    "mhpmevent16",
    "mhpmevent17",
    "mhpmevent18",
    "mhpmevent19",
    "mhpmevent20",
    "mhpmevent21",
    "mhpmevent22",
    "mhpmevent23",
    "mhpmevent24",
    "mhpmevent25",
    "mhpmevent26",
    "mhpmevent27",
    "mhpmevent28",
    "mhpmevent29",
    "mhpmevent30",
    "mhpmevent31",
];

static PMPCFG: [&str; 4] = ["pmpcfg0", "pmpcfg1", "pmpcfg2", "pmpcfg3"];

static PMPADDR: [&str; 16] = [
    "pmpaddr0",
    "pmpaddr1",
    "pmpaddr2",
    "pmpaddr3",
    "pmpaddr4",
    "pmpaddr5",
    "pmpaddr6",
    "pmpaddr7",
    "pmpaddr8",
    "pmpaddr9",
    "pmpaddr10",
    "pmpaddr11",
    "pmpaddr12",
    "pmpaddr13",
    "pmpaddr14",
    "pmpaddr15",
];

static MHPMCOUNTER: [&str; 29] = [
    "mhpmcounter3",
    "mhpmcounter4",
    "mhpmcounter5",
    "mhpmcounter6",
    "mhpmcounter7",
    "mhpmcounter8",
    "mhpmcounter9",
    "mhpmcounter10",
    "mhpmcounter11",
    "mhpmcounter12",
    "mhpmcounter13",
    "mhpmcounter14",
    "mhpmcounter15",
    "mhpmcounter16",
    "mhpmcounter17",
    "mhpmcounter18",
    "mhpmcounter19",
    "mhpmcounter20",
    "mhpmcounter21",
    "mhpmcounter22",
    "mhpmcounter23",
    "mhpmcounter24",
    "mhpmcounter25",
    "mhpmcounter26",
    "mhpmcounter27",
    "mhpmcounter28",
    "mhpmcounter29",
    "mhpmcounter30",
    "mhpmcounter31",
];

static MHPMCOUNTERH: [&str; 29] = [
    "mhpmcounter3h",
    "mhpmcounter4h",
    "mhpmcounter5h",
    "mhpmcounter6h",
    "mhpmcounter7h",
    "mhpmcounter8h",
    "mhpmcounter9h",
    "mhpmcounter10h",
    "mhpmcounter11h",
    "mhpmcounter12h",
    "mhpmcounter13h",
    "mhpmcounter14h",
    "mhpmcounter15h",
    "mhpmcounter16h",
    "mhpmcounter17h",
    "mhpmcounter18h",
    "mhpmcounter19h",
    "mhpmcounter20h",
    "mhpmcounter21h",
    "mhpmcounter22h",
    "mhpmcounter23h",
    "mhpmcounter24h",
    "mhpmcounter25h",
    "mhpmcounter26h",
    "mhpmcounter27h",
    "mhpmcounter28h",
    "mhpmcounter29h",
    "mhpmcounter30h",
    "mhpmcounter31h",
];

static HPMCOUNTER: [&str; 29] = [
    "hpmcounter3",
    "hpmcounter4",
    "hpmcounter5",
    "hpmcounter6",
    "hpmcounter7",
    "hpmcounter8",
    "hpmcounter9",
    "hpmcounter10",
    "hpmcounter11",
    "hpmcounter12",
    "hpmcounter13",
    "hpmcounter14",
    "hpmcounter15",
    "hpmcounter16",
    "hpmcounter17",
    "hpmcounter18",
    "hpmcounter19",
    "hpmcounter20",
    "hpmcounter21",
    "hpmcounter22",
    "hpmcounter23",
    "hpmcounter24",
    "hpmcounter25",
    "hpmcounter26",
    "hpmcounter27",
    "hpmcounter28",
    "hpmcounter29",
    "hpmcounter30",
    "hpmcounter31",
];

static HPMCOUNTERH: [&str; 29] = [
    "hpmcounter3h",
    "hpmcounter4h",
    "hpmcounter5h",
    "hpmcounter6h",
    "hpmcounter7h",
    "hpmcounter8h",
    "hpmcounter9h",
    "hpmcounter10h",
    "hpmcounter11h",
    "hpmcounter12h",
    "hpmcounter13h",
    "hpmcounter14h",
    "hpmcounter15h",
    "hpmcounter16h",
    "hpmcounter17h",
    "hpmcounter18h",
    "hpmcounter19h",
    "hpmcounter20h",
    "hpmcounter21h",
    "hpmcounter22h",
    "hpmcounter23h",
    "hpmcounter24h",
    "hpmcounter25h",
    "hpmcounter26h",
    "hpmcounter27h",
    "hpmcounter28h",
    "hpmcounter29h",
    "hpmcounter30h",
    "hpmcounter31h",
];

#[cfg(test)]
mod tests {
    use super::name;

    #[test]
    fn well_known() {
        assert_eq!(name(0x300), Some("mstatus"));
        assert_eq!(name(0x001), Some("fflags"));
        assert_eq!(name(0xc00), Some("cycle"));
        assert_eq!(name(0xf14), Some("mhartid"));
    }

    #[test]
    fn numbered_families() {
        assert_eq!(name(0x323), Some("mhpmevent3"));
        assert_eq!(name(0x33f), Some("mhpmevent31"));
        assert_eq!(name(0x3a3), Some("pmpcfg3"));
        assert_eq!(name(0x3bf), Some("pmpaddr15"));
        assert_eq!(name(0xb10), Some("mhpmcounter16"));
        assert_eq!(name(0xb9f), Some("mhpmcounter31h"));
        assert_eq!(name(0xc03), Some("hpmcounter3"));
        assert_eq!(name(0xc83), Some("hpmcounter3h"));
    }

    #[test]
    fn unassigned() {
        assert_eq!(name(0x999), None);
        assert_eq!(name(0x006), None);
        assert_eq!(name(0xb01), None);
        assert_eq!(name(0x1000), None);
    }
}

macro_rules! registers {
    ($($r:ident),* $(,)?) => {
        /// Register ids are positions in this list.
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum Reg {
            $($r),*
        }

        const NAMES: &[&str] = &[$(stringify!($r)),*];
    };
}

registers! {
    AC0, AC1, AC2, AC3, T0, T1, T2, T3,
    AR0, AR1, AR2, AR3, AR4, AR5, AR6, AR7,
    AC0L, AC0H, AC0G, AC1L, AC1H, AC1G, AC2L, AC2H, AC2G, AC3L, AC3H, AC3G,
    BK03, BK47, BKC, BRC0, BRC1, BRS1,
    BSA01, BSA23, BSA45, BSA67, BSAC,
    CDP, CDPH, CFCT, CSR, DBIER0, DBIER1,
    IER0, IER1, IFR0, IFR1, IVPD, IVPH, PC, PMST,
    REA0, REA0L, REA0H, REA1, REA1L, REA1H,
    RETA, RPTC,
    RSA0, RSA0L, RSA0H, RSA1, RSA1L, RSA1H,
    SP, SPH, SSP, ST0, ST1, ST0_55, ST1_55, ST2_55, ST3_55, TRN0, TRN1,
    XAR0, XAR1, XAR2, XAR3, XAR4, XAR5, XAR6, XAR7,
    XCDP, XDP, XPC, XSP, XSSP,
    MDP, MDP05, MDP67,
    // status flags
    ACOV2, ACOV3, TC1, TC2, CARRY, ACOV0, ACOV1, BRAF, XF, HM, INTM, M40,
    SATD, SXMD, C16, FRCT, C54CM, DBGM, EALLOW, RDM, CDPLC,
    AR7LC, AR6LC, AR5LC, AR4LC, AR3LC, AR2LC, AR1LC, AR0LC,
    CAFRZ, CAEN, CACLR, HINT, CBERR, MPNMC, SATA, CLKOFF, SMUL, SST,
    BORROW,
    // addressing-mode context
    ARMS, CPL, DP, DPH, PDP,
}

impl Reg {
    pub const fn id(self) -> u16 {
        self as u16
    }

    /// `self` plus a decoded register-field offset.
    pub const fn offset(self, n: u64) -> u16 {
        self as u16 + n as u16
    }
}

pub fn name(id: u16) -> Option<&'static str> {
    NAMES.get(id as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_ids() {
        assert_eq!(name(Reg::AC0.id()), Some("AC0"));
        assert_eq!(name(Reg::AR0.offset(3)), Some("AR3"));
        assert_eq!(name(Reg::ST2_55.id()), Some("ST2_55"));
        assert_eq!(name(Reg::PDP.id()), Some("PDP"));
        assert_eq!(name(Reg::PDP.id() + 1), None);
    }
}

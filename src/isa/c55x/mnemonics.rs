//! Kind-indexed mnemonic table. Two-line mnemonics carry both line names;
//! entries that a suffix rename can reach follow their base entries.

use crate::instruction::Kind;
use crate::instructions::{Features, Mnemonic};

macro_rules! opt {
    () => { None };
    ($s:literal) => { Some($s) };
}

macro_rules! mnemonics {
    ($($id:ident => $name:literal $(/ $second:literal)? [$($f:ident)*];)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum Mn {
            $($id),*
        }

        const ALL: &[Mn] = &[$(Mn::$id),*];

        pub static MNEMONICS: &[Mnemonic] = &[
            $(Mnemonic::new($name, opt!($($second)?), Features::empty()$(.union(Features::$f))*)),*
        ];
    };
}

impl Mn {
    pub const fn kind(self) -> Kind {
        Kind(self as u16)
    }

    pub fn from_kind(kind: Kind) -> Option<Mn> {
        ALL.get(kind.0 as usize).copied()
    }
}

mnemonics! {
    Null => "" [];
    Abdst => "abdst" [CHG1 CHG2 CHG3 CHG4];
    Abs1 => "abs" [CHG1];
    Abs2 => "abs" [USE1 CHG2];
    Add1 => "add" [CHG1];
    Add2 => "add" [USE1 CHG2];
    Add3 => "add" [USE1 USE2 CHG3];
    Add4 => "add" [USE1 USE2 USE3 CHG4];
    Addv1 => "addv" [CHG1];
    Addv2 => "addv" [USE1 CHG2];
    Addrv1 => "addrv" [CHG1];
    Addrv2 => "addrv" [USE1 CHG2];
    Maxdiff => "maxdiff" [USE1 USE2 CHG3 CHG4];
    Dmaxdiff => "dmaxdiff" [USE1 USE2 CHG3 CHG4 CHG5];
    Mindiff => "mindiff" [USE1 USE2 CHG3 CHG4];
    Dmindiff => "dmindiff" [USE1 USE2 CHG3 CHG4 CHG5];
    Addsubcc4 => "addsubcc" [USE1 USE2 USE3 CHG4];
    Addsubcc5 => "addsubcc" [USE1 USE2 USE3 USE4 CHG5];
    Addsub2cc => "addsub2cc" [USE1 USE2 USE3 USE4 USE5 CHG6];
    Sftcc => "sftcc" [CHG1 CHG2];
    Subc2 => "subc" [USE1 CHG2];
    Subc3 => "subc" [USE1 USE2 CHG3];
    Addsub => "addsub" [USE1 USE2 CHG3];
    Subadd => "subadd" [USE1 USE2 CHG3];
    MpyMpy => "mpy" / "mpy" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    MpyMpyr => "mpyr" / "mpyr" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    MpyMpy40 => "mpy40" / "mpy40" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    MpyMpyr40 => "mpyr40" / "mpyr40" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    MacMpy => "mac" / "mpy" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    MacrMpyr => "macr" / "mpyr" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    Mac40Mpy40 => "mac40" / "mpy40" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    Macr40Mpyr40 => "macr40" / "mpyr40" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    MasMpy => "mas" / "mpy" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    MasrMpyr => "masr" / "mpyr" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    Mas40Mpy40 => "mas40" / "mpy40" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    Masr40Mpyr40 => "masr40" / "mpyr40" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    AmarMpy => "amar" / "mpy" [CHG1 USE2 USE3 CHG4];
    AmarMpyr => "amar" / "mpyr" [CHG1 USE2 USE3 CHG4];
    AmarMpy40 => "amar" / "mpy40" [CHG1 USE2 USE3 CHG4];
    AmarMpyr40 => "amar" / "mpyr40" [CHG1 USE2 USE3 CHG4];
    MacMac => "mac" / "mac" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    MacrMacr => "macr" / "macr" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    Mac40Mac40 => "mac40" / "mac40" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    Macr40Macr40 => "macr40" / "macr40" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    MasMac => "mas" / "mac" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    MasrMacr => "masr" / "macr" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    Mas40Mac40 => "mas40" / "mac40" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    Masr40Macr40 => "masr40" / "macr40" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    AmarMac => "amar" / "mac" [CHG1 USE2 USE3 CHG4];
    AmarMacr => "amar" / "macr" [CHG1 USE2 USE3 CHG4];
    AmarMac40 => "amar" / "mac40" [CHG1 USE2 USE3 CHG4];
    AmarMacr40 => "amar" / "macr40" [CHG1 USE2 USE3 CHG4];
    MasMas => "mas" / "mas" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    MasrMasr => "masr" / "masr" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    Mas40Mas40 => "mas40" / "mas40" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    Masr40Masr40 => "masr40" / "masr40" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    AmarMas => "amar" / "mas" [CHG1 USE2 USE3 CHG4];
    AmarMasr => "amar" / "masr" [CHG1 USE2 USE3 CHG4];
    AmarMas40 => "amar" / "mas40" [CHG1 USE2 USE3 CHG4];
    AmarMasr40 => "amar" / "masr40" [CHG1 USE2 USE3 CHG4];
    MpyMac => "mpy" / "mac" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    MpyrMacr => "mpyr" / "macr" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    Mpy40Mac40 => "mpy40" / "mac40" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    Mpyr40Macr40 => "mpyr40" / "macr40" [USE1 USE2 CHG3 USE4 USE5 CHG6];
    Amar3 => "amar" [CHG1 CHG2 CHG3];
    Firsadd => "firsadd" [USE1 USE2 USE3 CHG4 CHG5];
    Firssub => "firssub" [USE1 USE2 USE3 CHG4 CHG5];
    MpymMov => "mpym" / "mov" [USE1 USE2 CHG3 USE4 CHG5];
    MpymrMov => "mpymr" / "mov" [USE1 USE2 CHG3 USE4 CHG5];
    MacmMov => "macm" / "mov" [USE1 USE2 CHG3 USE4 CHG5];
    MacmrMov => "macmr" / "mov" [USE1 USE2 CHG3 USE4 CHG5];
    MasmMov => "masm" / "mov" [USE1 USE2 CHG3 USE4 CHG5];
    MasmrMov => "masmr" / "mov" [USE1 USE2 CHG3 USE4 CHG5];
    AddMov => "add" / "mov" [USE1 USE2 CHG3 USE4 CHG5];
    SubMov => "sub" / "mov" [USE1 USE2 CHG3 USE4 CHG5];
    MovMov => "mov" / "mov" [USE1 USE2 USE3 CHG4];
    MovAadd => "mov" / "aadd" [USE1 CHG2 USE3 CHG4];
    MovAdd => "mov" / "add" [USE1 CHG2 USE3 USE4 CHG5];
    AmarAmar => "amar" / "amar" [CHG1 CHG2];
    AddAsub => "add" / "asub" [USE1 USE2 CHG3 USE4 CHG5];
    BtstMov => "btst" / "mov" [USE1 CHG2 CHG3 USE4 CHG5];
    MovAsub => "mov" / "asub" [USE1 CHG2 USE3 CHG4];
    Lms => "lms" [USE1 USE2 CHG3 CHG4];
    Max1 => "max" [CHG1];
    Max2 => "max" [USE1 CHG2];
    Min1 => "min" [CHG1];
    Min2 => "min" [USE1 CHG2];
    Cmp => "cmp" [USE1 CHG2];
    Cmpu => "cmpu" [USE1 CHG2];
    Aadd => "aadd" [USE1 CHG2];
    Asub => "asub" [USE1 CHG2];
    Amov => "amov" [USE1 CHG2];
    Amar1 => "amar" [CHG1];
    Sqr1 => "sqr" [CHG1];
    Sqr2 => "sqr" [CHG1 USE2];
    Sqrr1 => "sqrr" [CHG1];
    Sqrr2 => "sqrr" [CHG1 USE2];
    Mpy1 => "mpy" [CHG1];
    Mpy2 => "mpy" [CHG1 CHG2];
    Mpy3 => "mpy" [USE1 USE2 CHG3];
    Mpyr1 => "mpyr" [CHG1];
    Mpyr2 => "mpyr" [CHG1 CHG2];
    Mpyr3 => "mpyr" [CHG1 USE2 CHG3];
    Mpyk2 => "mpyk" [USE1 CHG2];
    Mpyk3 => "mpyk" [USE1 USE2 CHG3];
    Mpykr2 => "mpykr" [USE1 CHG2];
    Mpykr3 => "mpykr" [USE1 USE2 CHG3];
    Mpym2 => "mpym" [USE1 CHG2];
    Mpym3 => "mpym" [USE1 USE2 CHG3];
    Mpymr2 => "mpymr" [USE1 CHG2];
    Mpymr3 => "mpymr" [USE1 USE2 CHG3];
    Mpym403 => "mpym40" [USE1 USE2 CHG3];
    Mpymr403 => "mpymr40" [USE1 USE2 CHG3];
    Mpymu3 => "mpymu" [USE1 USE2 CHG3];
    Mpymru3 => "mpymru" [USE1 USE2 CHG3];
    Sqrm => "sqrm" [USE1 CHG2];
    Sqrmr => "sqrmr" [USE1 CHG2];
    Mpymk => "mpymk" [USE1 USE2 CHG3];
    Mpymkr => "mpymkr" [USE1 USE2 CHG3];
    Sqa1 => "sqa" [CHG1];
    Sqa2 => "sqa" [CHG1 USE2];
    Sqar1 => "sqar" [CHG1];
    Sqar2 => "sqar" [CHG1 USE2];
    Mac3 => "mac" [USE1 USE2 CHG3];
    Mac4 => "mac" [USE1 USE2 CHG3 CHG4];
    Macr3 => "macr" [USE1 USE2 CHG3];
    Macr4 => "macr" [USE1 USE2 CHG3 CHG4];
    Mack3 => "mack" [USE1 USE2 CHG3];
    Mack4 => "mack" [USE1 USE2 USE3 CHG4];
    Mackr3 => "mackr" [USE1 USE2 CHG3];
    Mackr4 => "mackr" [USE1 USE2 USE3 CHG4];
    Macm2 => "macm" [USE1 CHG2];
    Macm3 => "macm" [USE1 USE2 CHG3];
    Macm4 => "macm" [USE1 USE2 USE3 CHG4];
    Macmr2 => "macmr" [USE1 CHG2];
    Macmr3 => "macmr" [USE1 USE2 CHG3];
    Macmr4 => "macmr" [USE1 USE2 USE3 CHG4];
    Macm403 => "macm40" [USE1 USE2 CHG3];
    Macm404 => "macm40" [USE1 USE2 USE3 CHG4];
    Macmr403 => "macmr40" [USE1 USE2 CHG3];
    Macmr404 => "macmr40" [USE1 USE2 USE3 CHG4];
    Macmz => "macmz" [USE1 USE2 CHG3];
    Macmrz => "macmrz" [USE1 USE2 CHG3];
    Sqam2 => "sqam" [USE1 CHG2];
    Sqam3 => "sqam" [USE1 USE2 CHG3];
    Sqamr2 => "sqamr" [USE1 CHG2];
    Sqamr3 => "sqamr" [USE1 USE2 CHG3];
    Macmk3 => "macmk" [USE1 USE2 CHG3];
    Macmk4 => "macmk" [USE1 USE2 USE3 CHG4];
    Macmkr3 => "macmkr" [USE1 USE2 CHG3];
    Macmkr4 => "macmkr" [USE1 USE2 USE3 CHG4];
    Sqs1 => "sqs" [CHG1];
    Sqs2 => "sqs" [CHG1 USE2];
    Sqsr1 => "sqsr" [CHG1];
    Sqsr2 => "sqsr" [CHG1 USE2];
    Mas2 => "mas" [USE1 CHG2];
    Mas3 => "mas" [USE1 USE2 CHG3];
    Masr2 => "masr" [USE1 CHG2];
    Masr3 => "masr" [USE1 USE2 CHG3];
    Masm2 => "masm" [USE1 CHG2];
    Masm3 => "masm" [USE1 USE2 CHG3];
    Masm4 => "masm" [USE1 USE2 USE3 CHG4];
    Masmr2 => "masmr" [USE1 CHG2];
    Masmr3 => "masmr" [USE1 USE2 CHG3];
    Masmr4 => "masmr" [USE1 USE2 USE3 CHG4];
    Masm403 => "masm40" [USE1 USE2 CHG3];
    Masm404 => "masm40" [USE1 USE2 USE3 CHG4];
    Masmr403 => "masmr40" [USE1 USE2 CHG3];
    Masmr404 => "masmr40" [USE1 USE2 USE3 CHG4];
    Sqsm2 => "sqsm" [USE1 CHG2];
    Sqsm3 => "sqsm" [USE1 USE2 CHG3];
    Sqsmr2 => "sqsmr" [USE1 CHG2];
    Sqsmr3 => "sqsmr" [USE1 USE2 CHG3];
    Neg1 => "neg" [CHG1];
    Neg2 => "neg" [CHG1 USE2];
    MantNexp => "mant" / "nexp" [USE1 CHG2 USE3 CHG4];
    Exp => "exp" [USE1 CHG2];
    Cmpand => "cmpand" [USE1 CHG2 CHG3];
    Cmpandu => "cmpandu" [USE1 CHG2 CHG3];
    Cmpor => "cmpor" [USE1 CHG2 CHG3];
    Cmporu => "cmporu" [USE1 CHG2 CHG3];
    Round1 => "round" [CHG1];
    Round2 => "round" [USE1 CHG2];
    Sat1 => "sat" [CHG1];
    Sat2 => "sat" [USE1 CHG2];
    Satr1 => "satr" [CHG1];
    Satr2 => "satr" [USE1 CHG2];
    Sfts2 => "sfts" [CHG1 USE2];
    Sfts3 => "sfts" [USE1 USE2 CHG3];
    Sftsc2 => "sftsc" [CHG1 USE2];
    Sftsc3 => "sftsc" [USE1 USE2 CHG3];
    Sqdst => "sqdst" [USE1 USE2 CHG3 CHG4];
    Sub1 => "sub" [USE1];
    Sub2 => "sub" [USE1 CHG2];
    Sub3 => "sub" [USE1 USE2 CHG3];
    Sub4 => "sub" [USE1 USE2 USE3 CHG4];
    Band => "band" [USE1 USE2 CHG3];
    Bfxpa => "bfxpa" [USE1 USE2 CHG3];
    Bfxtr => "bfxtr" [USE1 USE2 CHG3];
    Btst => "btst" [USE1 CHG2 CHG3];
    Bnot => "bnot" [USE1 CHG2];
    Bclr2 => "bclr" [USE1 CHG2];
    Bset2 => "bset" [USE1 CHG2];
    Btstset => "btstset" [USE1 CHG2 CHG3];
    Btstclr => "btstclr" [USE1 CHG2 CHG3];
    Btstnot => "btstnot" [USE1 CHG2 CHG3];
    Btstp => "btstp" [USE1 USE2];
    Bclr1 => "bclr" [CHG1];
    Bset1 => "bset" [CHG1];
    Amar2 => "amar" [USE1 CHG2];
    Popboth => "popboth" [CHG1];
    Pshboth => "pshboth" [USE1];
    Bcnt => "bcnt" [USE1 USE2 CHG3 CHG4];
    Not1 => "not" [CHG1];
    Not2 => "not" [USE1 CHG2];
    And1 => "and" [USE1];
    And2 => "and" [USE1 CHG2];
    And3 => "and" [USE1 USE2 CHG3];
    Or1 => "or" [USE1];
    Or2 => "or" [USE1 CHG2];
    Or3 => "or" [USE1 USE2 CHG3];
    Xor1 => "xor" [USE1];
    Xor2 => "xor" [USE1 CHG2];
    Xor3 => "xor" [USE1 USE2 CHG3];
    Sftl2 => "sftl" [USE1 USE2];
    Sftl3 => "sftl" [USE1 USE2 CHG3];
    Rol => "rol" [CHG1 USE2 USE3 CHG4];
    Ror => "ror" [USE1 USE2 USE3 CHG4];
    Swap => "swap" [CHG1 CHG2];
    Swapp => "swapp" [CHG1 CHG2];
    Swap4 => "swap4" [CHG1 CHG2];
    Mov2 => "mov" [USE1 CHG2];
    Mov3 => "mov" [USE1 USE2 CHG3];
    Mov402 => "mov40" [USE1 CHG2];
    Delay => "delay" [USE1];
    Pop1 => "pop" [CHG1];
    Pop2 => "pop" [CHG1 CHG2];
    Psh1 => "psh" [USE1];
    Psh2 => "psh" [USE1 USE2];
    Bcc => "bcc" [USE1 USE2];
    Bccu => "bccu" [USE1 USE2];
    B => "b" [USE1 STOP];
    Callcc => "callcc" [USE1 USE2 CALL];
    Call => "call" [USE1 CALL];
    Xcc => "xcc" [USE1];
    Xccpart => "xccpart" [USE1];
    Idle => "idle" [];
    Nop => "nop" [];
    Nop16 => "nop_16" [];
    Rptblocal => "rptblocal" [USE1];
    Rptb => "rptb" [USE1];
    Rptcc => "rptcc" [USE1 USE2];
    Rpt => "rpt" [USE1];
    Rptadd => "rptadd" [USE1 USE2];
    Rptsub => "rptsub" [USE1 USE2];
    Retcc => "retcc" [USE1];
    Ret => "ret" [STOP];
    Reti => "reti" [STOP];
    Intr => "intr" [USE1];
    Reset => "reset" [];
    Trap => "trap" [USE1];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_index_the_table() {
        assert_eq!(MNEMONICS.len(), ALL.len());
        assert_eq!(Mn::from_kind(Mn::Trap.kind()), Some(Mn::Trap));
        let m = &MNEMONICS[Mn::MacMpy.kind().0 as usize];
        assert_eq!((m.name, m.second), ("mac", Some("mpy")));
        assert!(MNEMONICS[Mn::Ret.kind().0 as usize].features.contains(Features::STOP));
    }
}

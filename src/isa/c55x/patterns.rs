//! Opcode table, most specific encodings first within each leading-bits group.

use super::mnemonics::Mn;
use super::ops::Field::{self, *};
use super::ops::Rename as N;
use super::regs::Reg as R;
use crate::operand::Operators as O;
use crate::table::FieldMask::{Bits as B, Imm as I, Not as N_};
use crate::table::OpcodePattern;

macro_rules! p {
    ($code:expr, $mask:expr, $width:expr, $kind:ident $(, $f:expr => $m:expr)* $(,)?) => {
        OpcodePattern { code: $code, mask: $mask, width: $width, kind: Mn::$kind.kind(), fields: &[$(($f, $m)),*] }
    };
}

pub static PATTERNS: &[OpcodePattern<Field>] = &[
    p!(0x000000, 0xFE0000, 3, Rptcc, K8 => B(0x0000FF), Cond => B(0x007F00)),
    p!(0x020000, 0xFE0000, 3, Retcc, Cond => B(0x007F00)),
    p!(0x040000, 0xFE0000, 3, Bcc, L8 => B(0x0000FF), Cond => B(0x007F00)),
    p!(0x060000, 0xFE0000, 3, B, L16 => B(0x00FFFF)),
    p!(0x080000, 0xFE0000, 3, Call, L16 => B(0x00FFFF)),
    p!(0x0C0000, 0xFE0000, 3, Rpt, K16 => B(0x00FFFF)),
    p!(0x0E0000, 0xFE0000, 3, Rptb, Pmad => B(0x00FFFF)),
    p!(0x100000, 0xFE0F00, 3, And1, Src => B(0x003000), ShlW => B(0x00003F), OptSrc => B(0x00C000)),
    p!(0x100100, 0xFE0F00, 3, Or1, Src => B(0x003000), ShlW => B(0x00003F), OptSrc => B(0x00C000)),
    p!(0x100200, 0xFE0F00, 3, Xor1, Src => B(0x003000), ShlW => B(0x00003F), OptSrc => B(0x00C000)),
    p!(0x100300, 0xFE0F00, 3, Add2, Src => B(0x003000), ShlW => B(0x00003F), Src => B(0x00C000)),
    p!(0x100400, 0xFE0F00, 3, Sub2, Src => B(0x003000), ShlW => B(0x00003F), Src => B(0x00C000)),
    p!(0x100500, 0xFE0F00, 3, Sfts2, Src => B(0x003000), ShiftW => B(0x00003F), OptSrc => B(0x00C000)),
    p!(0x100600, 0xFE0F00, 3, Sftsc2, Src => B(0x003000), ShiftW => B(0x00003F), OptSrc => B(0x00C000)),
    p!(0x100700, 0xFE0F00, 3, Sftl2, Src => B(0x003000), ShiftW => B(0x00003F), OptSrc => B(0x00C000)),
    p!(0x100800, 0xFE0F00, 3, Exp, Src => B(0x003000), Tx => B(0x000030)),
    p!(0x100900, 0xFE0F00, 3, MantNexp, Src => B(0x003000), Src => B(0x00C000), Split => B(0), Src => B(0x003000), Tx => B(0x000030)),
    p!(0x100A00, 0xFE0F00, 3, Bcnt, Src => B(0x003000), Src => B(0x0000C0), TCx => B(0x000001), Tx => B(0x000030)),
    p!(0x100C00, 0xFE0F00, 3, Maxdiff, Src => B(0x003000), Src => B(0x0000C0), Src => B(0x00C000), Src => B(0x000030)),
    p!(0x100D00, 0xFE0F00, 3, Dmaxdiff, Src => B(0x003000), Src => B(0x0000C0), Src => B(0x00C000), Src => B(0x000030), TRNx => B(0x000001)),
    p!(0x100E00, 0xFE0F00, 3, Mindiff, Src => B(0x003000), Src => B(0x0000C0), Src => B(0x00C000), Src => B(0x000030)),
    p!(0x100F00, 0xFE0F00, 3, Dmindiff, Src => B(0x003000), Src => B(0x0000C0), Src => B(0x00C000), Src => B(0x000030), TRNx => B(0x000001)),
    p!(0x120000, 0xFE0300, 3, Cmp, Rename(N::Unsigned) => B(0x000004), Src => B(0x00F000), Relop => B(0x000C00), RelopReg => B(0x0000F0), TCx => B(0x000001)),
    p!(0x120100, 0xFE0308, 3, Cmpand, Rename(N::Unsigned) => B(0x000004), Src => B(0x00F000), Relop => B(0x000C00), RelopReg => B(0x0000F0), TCx => B(0x000002), TCx => B(0x000001)),
    p!(0x120108, 0xFE0308, 3, Cmpand, Rename(N::Unsigned) => B(0x000004), Src => B(0x00F000), Relop => B(0x000C00), RelopReg => B(0x0000F0), TCx => B(0x000002), Op(O::NOT) => I(1), TCx => B(0x000001)),
    p!(0x120200, 0xFE0308, 3, Cmpor, Rename(N::Unsigned) => N_(0x000004), Src => B(0x00F000), Relop => B(0x000C00), RelopReg => B(0x0000F0), TCx => B(0x000002), TCx => B(0x000001)),
    p!(0x120208, 0xFE0308, 3, Cmpor, Rename(N::Unsigned) => N_(0x000004), Src => B(0x00F000), Relop => B(0x000C00), RelopReg => B(0x0000F0), TCx => B(0x000002), Op(O::NOT) => I(1), TCx => B(0x000001)),
    p!(0x120300, 0xFE0308, 3, Rol, Bit => B(0x000001), Src => B(0x00F000), Bit => B(0x000002), Src => B(0x0000F0)),
    p!(0x120308, 0xFE0308, 3, Ror, Bit => B(0x000002), Src => B(0x00F000), Bit => B(0x000001), Src => B(0x0000F0)),
    p!(0x140000, 0xFE000F, 3, Aadd, Src => B(0x00F000), Src => B(0x0000F0)),
    p!(0x140001, 0xFE000F, 3, Amov, Src => B(0x00F000), Src => B(0x0000F0)),
    p!(0x140002, 0xFE000F, 3, Asub, Src => B(0x00F000), Src => B(0x0000F0)),
    p!(0x140004, 0xFE000F, 3, Aadd, K8 => B(0x00FF00), Src => B(0x0000F0)),
    p!(0x140005, 0xFE000F, 3, Amov, K8 => B(0x00FF00), Src => B(0x0000F0)),
    p!(0x140006, 0xFE000F, 3, Asub, K8 => B(0x00FF00), Src => B(0x0000F0)),
    p!(0x140008, 0xFE000F, 3, Aadd, Src => B(0x00F000), Src => B(0x0000F0)),
    p!(0x140009, 0xFE000F, 3, Amov, Src => B(0x00F000), Src => B(0x0000F0)),
    p!(0x14000A, 0xFE000F, 3, Asub, Src => B(0x00F000), Src => B(0x0000F0)),
    p!(0x14000C, 0xFE000F, 3, Aadd, K8 => B(0x00FF00), Src => B(0x0000F0)),
    p!(0x14000D, 0xFE000F, 3, Amov, K8 => B(0x00FF00), Src => B(0x0000F0)),
    p!(0x14000E, 0xFE000F, 3, Asub, K8 => B(0x00FF00), Src => B(0x0000F0)),
    p!(0x160000, 0xFE000F, 3, Mov2, K8 => B(0x0007F0), Fixed(R::DPH) => B(0)),
    p!(0x160001, 0xFE000F, 3, Mov2, K8 => B(0x0007F0), Fixed(R::MDP05) => B(0)),
    p!(0x160002, 0xFE000F, 3, Mov2, K8 => B(0x0007F0), Fixed(R::MDP67) => B(0)),
    p!(0x160003, 0xFE000F, 3, Mov2, K16 => B(0x001FF0), Fixed(R::PDP) => B(0)),
    p!(0x160004, 0xFE000F, 3, Mov2, K16 => B(0x00FFF0), Fixed(R::BK03) => B(0)),
    p!(0x160005, 0xFE000F, 3, Mov2, K16 => B(0x00FFF0), Fixed(R::BK47) => B(0)),
    p!(0x160006, 0xFE000F, 3, Mov2, K16 => B(0x00FFF0), Fixed(R::BKC) => B(0)),
    p!(0x160008, 0xFE000F, 3, Mov2, K16 => B(0x00FFF0), Fixed(R::CSR) => B(0)),
    p!(0x160009, 0xFE000F, 3, Mov2, K16 => B(0x00FFF0), Fixed(R::BRC0) => B(0)),
    p!(0x16000A, 0xFE000F, 3, Mov2, K16 => B(0x00FFF0), Fixed(R::BRC1) => B(0)),
    p!(0x180000, 0xFE0000, 3, And3, K8 => B(0x00FF00), Src => B(0x00000F), Src => B(0x0000F0)),
    p!(0x1A0000, 0xFE0000, 3, Or3, K8 => B(0x00FF00), Src => B(0x00000F), Src => B(0x0000F0)),
    p!(0x1C0000, 0xFE0000, 3, Xor3, K8 => B(0x00FF00), Src => B(0x00000F), Src => B(0x0000F0)),
    p!(0x1E0000, 0xFE0002, 3, Mpyk2, Rename(N::Round) => B(0x000001), SK8 => B(0x00FF00), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0x1E0002, 0xFE0002, 3, Mack3, Rename(N::Round) => B(0x000001), Tx => B(0x00000C), SK8 => B(0x00FF00), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0x20, 0xFE, 1, Nop),
    p!(0x2200, 0xFE00, 2, Mov2, Src => B(0x00F0), Src => B(0x000F)),
    p!(0x2400, 0xFE00, 2, Add1, Src => B(0x00F0), OptSrc => B(0x000F)),
    p!(0x2600, 0xFE00, 2, Sub1, Src => B(0x00F0), OptSrc => B(0x000F)),
    p!(0x2800, 0xFE00, 2, And2, Src => B(0x00F0), Src => B(0x000F)),
    p!(0x2A00, 0xFE00, 2, Or2, Src => B(0x00F0), Src => B(0x000F)),
    p!(0x2C00, 0xFE00, 2, Xor2, Src => B(0x00F0), Src => B(0x000F)),
    p!(0x2E00, 0xFE00, 2, Max1, Src => B(0x00F0), Src => B(0x000F)),
    p!(0x3000, 0xFE00, 2, Min1, Src => B(0x00F0), Src => B(0x000F)),
    p!(0x3200, 0xFE00, 2, Abs1, Src => B(0x00F0), OptSrc => B(0x000F)),
    p!(0x3400, 0xFE00, 2, Neg1, Src => B(0x00F0), OptSrc => B(0x000F)),
    p!(0x3600, 0xFE00, 2, Not1, Src => B(0x00F0), OptSrc => B(0x000F)),
    p!(0x3800, 0xFE00, 2, Psh2, Src => B(0x00F0), Src => B(0x000F)),
    p!(0x3A00, 0xFE00, 2, Pop2, Src => B(0x00F0), Src => B(0x000F)),
    p!(0x3C00, 0xFE00, 2, Mov2, K8 => B(0x00F0), Src => B(0x000F)),
    p!(0x3E00, 0xFE00, 2, Mov2, NegK4 => B(0x00F0), Src => B(0x000F)),
    p!(0x4000, 0xFE00, 2, Add2, K8 => B(0x00F0), Src => B(0x000F)),
    p!(0x4200, 0xFE00, 2, Sub2, K8 => B(0x00F0), Src => B(0x000F)),
    p!(0x4400, 0xFEC0, 2, Mov2, Src => B(0x0030), Op(O::HI) => I(1), Src => B(0x000F)),
    p!(0x4440, 0xFED0, 2, Sfts2, Src => B(0x000F), MinusOne => B(0)),
    p!(0x4450, 0xFED0, 2, Sfts2, Src => B(0x000F), One => B(0)),
    p!(0x4480, 0xFEF0, 2, Mov2, Fixed(R::SP) => B(0), Src => B(0x000F)),
    p!(0x4490, 0xFEF0, 2, Mov2, Fixed(R::SSP) => B(0), Src => B(0x000F)),
    p!(0x44A0, 0xFEF0, 2, Mov2, Fixed(R::CDP) => B(0), Src => B(0x000F)),
    p!(0x44C0, 0xFEF0, 2, Mov2, Fixed(R::BRC0) => B(0), Src => B(0x000F)),
    p!(0x44D0, 0xFEF0, 2, Mov2, Fixed(R::BRC1) => B(0), Src => B(0x000F)),
    p!(0x44E0, 0xFEF0, 2, Mov2, Fixed(R::RPTC) => B(0), Src => B(0x000F)),
    p!(0x4600, 0xFE09, 2, Bclr2, K8 => B(0x00F0), StX => B(0x0006)),
    p!(0x4601, 0xFE09, 2, Bset2, K8 => B(0x00F0), StX => B(0x0006)),
    p!(0x4800, 0xFE07, 2, Rpt, Fixed(R::CSR) => B(0)),
    p!(0x4801, 0xFE07, 2, Rptadd, Fixed(R::CSR) => B(0), Src => B(0x00F0)),
    p!(0x4802, 0xFE07, 2, Rptadd, Fixed(R::CSR) => B(0), K8 => B(0x00F0)),
    p!(0x4803, 0xFE07, 2, Rptsub, Fixed(R::CSR) => B(0), K8 => B(0x00F0)),
    p!(0x4804, 0xFE07, 2, Ret),
    p!(0x4805, 0xFE07, 2, Reti),
    p!(0x4A00, 0xFE80, 2, B, L7 => B(0x007F)),
    p!(0x4A80, 0xFE80, 2, Rptblocal, Pmad => B(0x007F)),
    p!(0x4C00, 0xFE00, 2, Rpt, K8 => B(0x00FF)),
    p!(0x4E00, 0xFE00, 2, Aadd, SK8 => B(0x00FF), Fixed(R::SP) => B(0)),
    p!(0x5000, 0xFE07, 2, Sftl2, Src => B(0x00F0), One => B(0)),
    p!(0x5001, 0xFE07, 2, Sftl2, Src => B(0x00F0), MinusOne => B(0)),
    p!(0x5002, 0xFE07, 2, Pop1, Src => B(0x00F0)),
    p!(0x5003, 0xFE07, 2, Pop1, Src => B(0x0030), Op(O::DBL) => I(1)),
    p!(0x5004, 0xFE07, 2, Popboth, XReg => B(0x00F0)),
    p!(0x5005, 0xFE07, 2, Pshboth, XReg => B(0x00F0)),
    p!(0x5006, 0xFE07, 2, Psh1, Src => B(0x00F0)),
    p!(0x5007, 0xFE07, 2, Psh1, Src => B(0x0030), Op(O::DBL) => I(1)),
    p!(0x5200, 0xFE0C, 2, Mov2, Src => B(0x00F0), Src => B(0x0003), Op(O::HI) => I(1)),
    p!(0x5208, 0xFE0F, 2, Mov2, Src => B(0x00F0), Fixed(R::SP) => B(0)),
    p!(0x5209, 0xFE0F, 2, Mov2, Src => B(0x00F0), Fixed(R::SSP) => B(0)),
    p!(0x520A, 0xFE0F, 2, Mov2, Src => B(0x00F0), Fixed(R::CDP) => B(0)),
    p!(0x520C, 0xFE0F, 2, Mov2, Src => B(0x00F0), Fixed(R::CSR) => B(0)),
    p!(0x520D, 0xFE0F, 2, Mov2, Src => B(0x00F0), Fixed(R::BRC1) => B(0)),
    p!(0x520E, 0xFE0F, 2, Mov2, Src => B(0x00F0), Fixed(R::BRC0) => B(0)),
    p!(0x5400, 0xFE0F, 2, Addv1, Src => B(0x0030), OptSrc => B(0x00C0)),
    p!(0x5401, 0xFE0F, 2, Addrv1, Src => B(0x0030), OptSrc => B(0x00C0)),
    p!(0x5402, 0xFE0E, 2, Sqa1, Rename(N::Round) => B(0x0001), Src => B(0x0030), OptSrc => B(0x00C0)),
    p!(0x5404, 0xFE0E, 2, Sqs1, Rename(N::Round) => B(0x0001), Src => B(0x0030), OptSrc => B(0x00C0)),
    p!(0x5406, 0xFE0E, 2, Mpy1, Rename(N::Round) => B(0x0001), Src => B(0x0030), OptSrc => B(0x00C0)),
    p!(0x5408, 0xFE0E, 2, Sqr1, Rename(N::Round) => B(0x0001), Src => B(0x0030), OptSrc => B(0x00C0)),
    p!(0x540A, 0xFE0E, 2, Round1, Src => B(0x0030), OptSrc => B(0x00C0)),
    p!(0x540C, 0xFE0E, 2, Sat1, Rename(N::Round) => B(0x0001), Src => B(0x0030), OptSrc => B(0x00C0)),
    p!(0x5600, 0xFE02, 2, Mac3, Rename(N::Round) => B(0x0001), Src => B(0x0030), Tx => B(0x000C), OptSrc => B(0x00C0), Src => B(0x00C0)),
    p!(0x5602, 0xFE02, 2, Mas2, Rename(N::Round) => B(0x0001), Tx => B(0x000C), Src => B(0x0030), OptSrc => B(0x00C0)),
    p!(0x5800, 0xFE02, 2, Mpy2, Rename(N::Round) => B(0x0001), Tx => B(0x000C), Src => B(0x0030), OptSrc => B(0x00C0)),
    p!(0x5802, 0xFE02, 2, Mac4, Rename(N::Round) => B(0x0001), Src => B(0x00C0), Tx => B(0x000C), Src => B(0x0030), Src => B(0x00C0)),
    p!(0x5A00, 0xFE03, 2, Add2, Src => B(0x0030), ShlTx => B(0x000C), Src => B(0x00C0)),
    p!(0x5A01, 0xFE03, 2, Sub2, Src => B(0x0030), ShlTx => B(0x000C), Src => B(0x00C0)),
    p!(0x5A02, 0xFE02, 2, Sftcc, Src => B(0x00C0), TCx => B(0x0001)),
    p!(0x5C00, 0xFE03, 2, Sftl2, Src => B(0x0030), Tx => B(0x000C), OptSrc => B(0x00C0)),
    p!(0x5C01, 0xFE03, 2, Sfts2, Src => B(0x0030), Tx => B(0x000C), OptSrc => B(0x00C0)),
    p!(0x5C02, 0xFE03, 2, Sftsc2, Src => B(0x0030), Tx => B(0x000C), OptSrc => B(0x00C0)),
    p!(0x5E00, 0xFEC0, 2, Swap, Swap => B(0x003F)),
    p!(0x5E80, 0xFEC0, 2, Nop16),
    p!(0x6000, 0xF800, 2, Bcc, L4 => B(0x0780), Cond => B(0x007F)),
    p!(0x6800, 0xFF00, 2, Bcc, P24 => B(0), Cond => B(0x007F)),
    p!(0x6900, 0xFF00, 2, Callcc, P24 => B(0), Cond => B(0x007F)),
    p!(0x6A, 0xFF, 1, B, P24 => B(0)),
    p!(0x6C, 0xFF, 1, Call, P24 => B(0)),
    p!(0x6D000000, 0xFF000000, 4, Bcc, L16 => B(0x0000FFFF), Cond => B(0x007F0000)),
    p!(0x6E000000, 0xFF000000, 4, Callcc, L16 => B(0x0000FFFF), Cond => B(0x007F0000)),
    p!(0x6F000000, 0xFF000000, 4, Bcc, Rename(N::Unsigned) => B(0x00010000), L8 => B(0x000000FF), Src => B(0x00F00000), Relop => B(0x000C0000), RelopK8 => B(0x0000FF00)),
    p!(0x70000000, 0xFF000000, 4, Add2, SK16 => B(0x00FFFF00), ShlK => B(0x0000000F), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0x71000000, 0xFF000000, 4, Sub2, SK16 => B(0x00FFFF00), ShlK => B(0x0000000F), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0x72000000, 0xFF000000, 4, And2, K16 => B(0x00FFFF00), ShlK => B(0x0000000F), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0x73000000, 0xFF000000, 4, Or2, K16 => B(0x00FFFF00), ShlK => B(0x0000000F), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0x74000000, 0xFF000000, 4, Xor2, K16 => B(0x00FFFF00), ShlK => B(0x0000000F), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0x75000000, 0xFF000000, 4, Mov2, SK16 => B(0x00FFFF00), ShlK => B(0x0000000F), Src => B(0x00000030)),
    p!(0x76000000, 0xFF00000C, 4, Bfxtr, K16 => B(0x00FFFF00), Src => B(0x00000003), Src => B(0x000000F0)),
    p!(0x76000004, 0xFF00000C, 4, Bfxpa, K16 => B(0x00FFFF00), Src => B(0x00000003), Src => B(0x000000F0)),
    p!(0x76000008, 0xFF00000C, 4, Mov2, SK16 => B(0x00FFFF00), Src => B(0x000000F0)),
    p!(0x77000000, 0xFF000000, 4, Amov, D16 => B(0x00FFFF00), Src => B(0x000000F0)),
    p!(0x78000000, 0xFF00001E, 4, Mov2, K16 => B(0x00FFFF00), Fixed(R::DP) => B(0)),
    p!(0x78000002, 0xFF00001E, 4, Mov2, K16 => B(0x00FFFF00), Fixed(R::SSP) => B(0)),
    p!(0x78000004, 0xFF00001E, 4, Mov2, K16 => B(0x00FFFF00), Fixed(R::CDP) => B(0)),
    p!(0x78000006, 0xFF00001E, 4, Mov2, K16 => B(0x00FFFF00), Fixed(R::BSA01) => B(0)),
    p!(0x78000008, 0xFF00001E, 4, Mov2, K16 => B(0x00FFFF00), Fixed(R::BSA23) => B(0)),
    p!(0x7800000A, 0xFF00001E, 4, Mov2, K16 => B(0x00FFFF00), Fixed(R::BSA45) => B(0)),
    p!(0x7800000C, 0xFF00001E, 4, Mov2, K16 => B(0x00FFFF00), Fixed(R::BSA67) => B(0)),
    p!(0x7800000E, 0xFF00001E, 4, Mov2, K16 => B(0x00FFFF00), Fixed(R::BSAC) => B(0)),
    p!(0x78000010, 0xFF00001E, 4, Mov2, K16 => B(0x00FFFF00), Fixed(R::SP) => B(0)),
    p!(0x79000000, 0xFF000002, 4, Mpyk2, Rename(N::Round) => B(0x00000001), SK16 => B(0x00FFFF00), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0x79000002, 0xFF000002, 4, Mack3, Rename(N::Round) => B(0x00000001), Tx => B(0x0000000C), SK16 => B(0x00FFFF00), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0x7A000000, 0xFF00000E, 4, Add2, SK16 => B(0x00FFFF00), Shl16 => B(0), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0x7A000002, 0xFF00000E, 4, Sub2, SK16 => B(0x00FFFF00), Shl16 => B(0), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0x7A000004, 0xFF00000E, 4, And2, K16 => B(0x00FFFF00), Shl16 => B(0), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0x7A000006, 0xFF00000E, 4, Or2, K16 => B(0x00FFFF00), Shl16 => B(0), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0x7A000008, 0xFF00000E, 4, Xor2, K16 => B(0x00FFFF00), Shl16 => B(0), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0x7A00000A, 0xFF00000E, 4, Mov2, SK16 => B(0x00FFFF00), Shl16 => B(0), Src => B(0x00000030)),
    p!(0x7A00000C, 0xFF00000E, 4, Idle),
    p!(0x7B000000, 0xFF000000, 4, Add2, SK16 => B(0x00FFFF00), Src => B(0x0000000F), OptSrc => B(0x000000F0)),
    p!(0x7C000000, 0xFF000000, 4, Sub2, SK16 => B(0x00FFFF00), Src => B(0x0000000F), OptSrc => B(0x000000F0)),
    p!(0x7D000000, 0xFF000000, 4, And2, K16 => B(0x00FFFF00), Src => B(0x0000000F), Src => B(0x000000F0)),
    p!(0x7E000000, 0xFF000000, 4, Or2, K16 => B(0x00FFFF00), Src => B(0x0000000F), Src => B(0x000000F0)),
    p!(0x7F000000, 0xFF000000, 4, Xor2, K16 => B(0x00FFFF00), Src => B(0x0000000F), Src => B(0x000000F0)),
    p!(0x800000, 0xFF000C, 3, Mov2, Xmem => B(0x00FC00), Op(O::DBL) => I(1), Xmem => B(0x0003F0), Op(O::DBL) => I(1)),
    p!(0x800004, 0xFF000C, 3, Mov2, Xmem => B(0x00FC00), Xmem => B(0x0003F0)),
    p!(0x800008, 0xFF000C, 3, Mov3, Src => B(0x000003), Xmem => B(0x00FC00), Xmem => B(0x0003F0)),
    p!(0x810000, 0xFF000C, 3, Add3, Xmem => B(0x00FC00), Xmem => B(0x0003F0), Src => B(0x000003)),
    p!(0x810004, 0xFF000C, 3, Sub3, Xmem => B(0x00FC00), Xmem => B(0x0003F0), Src => B(0x000003)),
    p!(0x810008, 0xFF000C, 3, Mov3, Xmem => B(0x00FC00), Xmem => B(0x0003F0), Src => B(0x000003)),
    p!(0x82000000, 0xFF000C00, 4, MpyMpy, Rename(N::RoundBoth) => B(0x00000001), Rename(N::Wide40Both) => B(0x00000002), Xmem => B(0x00FC0000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x00000030), Split => B(0), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x0000000C)),
    p!(0x82000400, 0xFF000C00, 4, MacMpy, Rename(N::RoundBoth) => B(0x00000001), Rename(N::Wide40Both) => B(0x00000002), Xmem => B(0x00FC0000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x00000030), Split => B(0), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x0000000C)),
    p!(0x82000800, 0xFF000C00, 4, MasMpy, Rename(N::RoundBoth) => B(0x00000001), Rename(N::Wide40Both) => B(0x00000002), Xmem => B(0x00FC0000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x00000030), Split => B(0), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x0000000C)),
    p!(0x82000C00, 0xFF000C00, 4, AmarMpy, Rename(N::RoundSecond) => B(0x00000001), Rename(N::Wide40Second) => B(0x00000002), Xmem => B(0x00FC0000), Split => B(0), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x0000000C)),
    p!(0x83000000, 0xFF000C00, 4, MacMac, Rename(N::RoundBoth) => B(0x00000001), Rename(N::Wide40Both) => B(0x00000002), Xmem => B(0x00FC0000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x00000030), Split => B(0), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x0000000C)),
    p!(0x83000400, 0xFF000C00, 4, MasMac, Rename(N::RoundBoth) => B(0x00000001), Rename(N::Wide40Both) => B(0x00000002), Xmem => B(0x00FC0000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x00000030), Split => B(0), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x0000000C)),
    p!(0x83000800, 0xFF000C00, 4, MacMac, Rename(N::RoundBoth) => B(0x00000001), Rename(N::Wide40Both) => B(0x00000002), Xmem => B(0x00FC0000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x00000030), Shr => I(16), Split => B(0), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x0000000C)),
    p!(0x83000C00, 0xFF000C00, 4, AmarMac, Rename(N::RoundSecond) => B(0x00000001), Rename(N::Wide40Second) => B(0x00000002), Xmem => B(0x00FC0000), Split => B(0), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x0000000C)),
    p!(0x84000000, 0xFF000C00, 4, MasMac, Rename(N::RoundBoth) => B(0x00000001), Rename(N::Wide40Both) => B(0x00000002), Xmem => B(0x00FC0000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x00000030), Split => B(0), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x0000000C), Shr => I(16)),
    p!(0x84000400, 0xFF000C00, 4, AmarMac, Rename(N::RoundSecond) => B(0x00000001), Rename(N::Wide40Second) => B(0x00000002), Xmem => B(0x00FC0000), Split => B(0), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x0000000C), Shr => I(16)),
    p!(0x84000800, 0xFF000C00, 4, MpyMac, Rename(N::RoundBoth) => B(0x00000001), Rename(N::Wide40Both) => B(0x00000002), Xmem => B(0x00FC0000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x00000030), Split => B(0), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x0000000C), Shr => I(16)),
    p!(0x84000C00, 0xFF000C00, 4, MacMac, Rename(N::RoundBoth) => B(0x00000001), Rename(N::Wide40Both) => B(0x00000002), Xmem => B(0x00FC0000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x00000030), Shr => I(16), Split => B(0), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x0000000C), Shr => I(16)),
    p!(0x85000000, 0xFF000C00, 4, AmarMas, Rename(N::RoundSecond) => B(0x00000001), Rename(N::Wide40Second) => B(0x00000002), Xmem => B(0x00FC0000), Split => B(0), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x0000000C)),
    p!(0x85000400, 0xFF000C00, 4, MasMas, Rename(N::RoundBoth) => B(0x00000001), Rename(N::Wide40Both) => B(0x00000002), Xmem => B(0x00FC0000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x00000030), Split => B(0), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000080), Cmem => B(0x00000300), Op(O::UNS) => B(0x00000040), Src => B(0x0000000C)),
    p!(0x85000800, 0xFF000C00, 4, Amar3, Xmem => B(0x00FC0000), Xmem => B(0x0003F000), Cmem => B(0x00000300)),
    p!(0x85000C00, 0xFF000C10, 4, Firsadd, Xmem => B(0x00FC0000), Xmem => B(0x0003F000), Cmem => B(0x00000300), Src => B(0x000000C0), Src => B(0x0000000C)),
    p!(0x85000C10, 0xFF000C10, 4, Firssub, Xmem => B(0x00FC0000), Xmem => B(0x0003F000), Cmem => B(0x00000300), Src => B(0x000000C0), Src => B(0x0000000C)),
    p!(0x86000000, 0xFF0000E0, 4, Mpym3, Rename(N::Round) => B(0x00000001), Rename(N::Wide40) => B(0x00000010), Xmem => B(0x00FC0000), Op(O::UNS) => B(0x00000008), Op(O::T3) => B(0x00000002), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000004), Src => B(0x00000300)),
    p!(0x86000020, 0xFF0000E0, 4, Macm3, Rename(N::Round) => B(0x00000001), Rename(N::Wide40) => B(0x00000010), Xmem => B(0x00FC0000), Op(O::UNS) => B(0x00000008), Op(O::T3) => B(0x00000002), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000004), Src => B(0x00000C00), OptSrc => B(0x00000300)),
    p!(0x86000040, 0xFF0000E0, 4, Macm3, Rename(N::Round) => B(0x00000001), Rename(N::Wide40) => B(0x00000010), Xmem => B(0x00FC0000), Op(O::UNS) => B(0x00000008), Op(O::T3) => B(0x00000002), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000004), Src => B(0x00000C00), Shr => I(16), OptSrc => B(0x00000300)),
    p!(0x86000060, 0xFF0000E0, 4, Masm3, Rename(N::Round) => B(0x00000001), Rename(N::Wide40) => B(0x00000010), Xmem => B(0x00FC0000), Op(O::UNS) => B(0x00000008), Op(O::T3) => B(0x00000002), Xmem => B(0x0003F000), Op(O::UNS) => B(0x00000004), Src => B(0x00000C00), OptSrc => B(0x00000300)),
    p!(0x86000080, 0xFF0000E0, 4, MasmMov, Rename(N::RoundFirst) => B(0x00000001), Xmem => B(0x00FC0000), Op(O::T3) => B(0x00000002), Tx => B(0x0000000C), Src => B(0x00000C00), Split => B(0), Xmem => B(0x0003F000), Shl16 => B(0), Src => B(0x00000300)),
    p!(0x860000A0, 0xFF0000E0, 4, MacmMov, Rename(N::RoundFirst) => B(0x00000001), Xmem => B(0x00FC0000), Op(O::T3) => B(0x00000002), Tx => B(0x0000000C), Src => B(0x00000C00), Split => B(0), Xmem => B(0x0003F000), Shl16 => B(0), Src => B(0x00000300)),
    p!(0x860000C0, 0xFF0000E0, 4, Lms, Xmem => B(0x00FC0000), Xmem => B(0x0003F000), Src => B(0x00000C00), Src => B(0x00000300)),
    p!(0x860000E0, 0xFF0000F0, 4, Sqdst, Xmem => B(0x00FC0000), Xmem => B(0x0003F000), Src => B(0x00000C00), Src => B(0x00000300)),
    p!(0x860000F0, 0xFF0000F0, 4, Abdst, Xmem => B(0x00FC0000), Xmem => B(0x0003F000), Src => B(0x00000C00), Src => B(0x00000300)),
    p!(0x87000000, 0xFF0000E0, 4, MpymMov, Rename(N::RoundFirst) => B(0x00000001), Xmem => B(0x00FC0000), Op(O::T3) => B(0x00000002), Tx => B(0x0000000C), Src => B(0x00000300), Split => B(0), Src => B(0x00000C00), Op(O::HI) => I(1), ShlT2 => B(0), Xmem => B(0x0003F000)),
    p!(0x87000020, 0xFF0000E0, 4, MacmMov, Rename(N::RoundFirst) => B(0x00000001), Xmem => B(0x00FC0000), Op(O::T3) => B(0x00000002), Tx => B(0x0000000C), Src => B(0x00000300), Split => B(0), Src => B(0x00000C00), Op(O::HI) => I(1), ShlT2 => B(0), Xmem => B(0x0003F000)),
    p!(0x87000040, 0xFF0000E0, 4, MasmMov, Rename(N::RoundFirst) => B(0x00000001), Xmem => B(0x00FC0000), Op(O::T3) => B(0x00000002), Tx => B(0x0000000C), Src => B(0x00000300), Split => B(0), Src => B(0x00000C00), Op(O::HI) => I(1), ShlT2 => B(0), Xmem => B(0x0003F000)),
    p!(0x87000080, 0xFF0000E0, 4, AddMov, Xmem => B(0x00FC0000), Shl16 => B(0), Src => B(0x00000C00), Src => B(0x00000300), Split => B(0), Src => B(0x00000300), Op(O::HI) => I(1), ShlT2 => B(0), Xmem => B(0x0003F000)),
    p!(0x870000A0, 0xFF0000E0, 4, SubMov, Xmem => B(0x00FC0000), Shl16 => B(0), Src => B(0x00000C00), Src => B(0x00000300), Split => B(0), Src => B(0x00000300), Op(O::HI) => I(1), ShlT2 => B(0), Xmem => B(0x0003F000)),
    p!(0x870000C0, 0xFF0000E0, 4, MovMov, Xmem => B(0x00FC0000), Shl16 => B(0), Src => B(0x00000300), Split => B(0), Src => B(0x00000C00), Op(O::HI) => I(1), ShlT2 => B(0), Xmem => B(0x0003F000)),
    p!(0x8A0000A0, 0xFF0000F0, 4, MovMov, Xmem => B(0x00FC0000), Src => B(0x00000F00), Split => B(0), Xmem => B(0x0003F000), Src => B(0x0000000F)),
    p!(0x8A00001000, 0xFF0000F700, 5, MovAadd, Smem => B(0x00FF000000), Src => B(0x00000F0000), Split => B(0), Src => B(0x00000000F0), Src => B(0x0000F00000)),
    p!(0x8A0000D600, 0xFF0000FF00, 5, MovAdd, Xmem => B(0x00FC000000), Src => B(0x00000F0000), Split => B(0), Xmem => B(0x0003F00000), Src => B(0x00000000F0), Src => B(0x000000000F)),
    p!(0x8A0000E708, 0xFF0000FF0C, 5, MovMov, Xmem => B(0x00FC000000), Src => B(0x00000F0000), Split => B(0), Src => B(0x00000000C0), ShlTx => B(0x0000000030), Op(O::HI) => I(1), Op(O::RND) => B(0x0000000001), Xmem => B(0x0003F00000)),
    p!(0x8B0004B4, 0xFF000FFF, 4, AmarAmar, Xmem => B(0x00FC0000), Split => B(0), Xmem => B(0x0003F000)),
    p!(0x8C00001400, 0xFF0000F700, 5, MovAadd, Src => B(0x00000F0000), Smem => B(0x00FF000000), Split => B(0), K8 => B(0x00000000FF), Src => B(0x0000F00000)),
    p!(0x8D000CB000, 0xFF000FFC03, 5, BtstMov, K8 => B(0x00000000F0), Xmem => B(0x00FC000000), TCx => B(0x0000000001), Split => B(0), Xmem => B(0x0003F00000), Shl16 => B(0), Src => B(0x0000000300)),
    p!(0x8D00061A0000, 0xFF000FF70000, 6, AddAsub, Smem => B(0x00FF00000000), Src => B(0x00000000F000), Src => B(0x000000000F00), Split => B(0), Src => B(0x0000000000F0), Src => B(0x0000F0000000)),
    p!(0x8E000B100500, 0xFF000FF70F00, 6, MovAadd, XReg => B(0x00000000F000), Lmem => B(0x00FF00000000), Op(O::DBL) => I(1), Split => B(0), Src => B(0x0000000000F0), Src => B(0x0000F0000000)),
    p!(0x8E000B160500, 0xFF000FF70F00, 6, MovAsub, XReg => B(0x00000000F000), Lmem => B(0x00FF00000000), Op(O::DBL) => I(1), Split => B(0), K8 => B(0x0000000000FF), Src => B(0x0000F0000000)),
    p!(0x8E000D100800, 0xFF000FF70F00, 6, MovAadd, Lmem => B(0x00FF00000000), Op(O::DBL) => I(1), Src => B(0x000000003000), Split => B(0), Src => B(0x0000000000F0), Src => B(0x0000F0000000)),
    p!(0x8E000B140500, 0xFF000FF70F00, 6, MovAadd, XReg => B(0x00000000F000), Lmem => B(0x00FF00000000), Op(O::DBL) => I(1), Split => B(0), K8 => B(0x0000000000FF), Src => B(0x0000F0000000)),
    p!(0x8E000B140800, 0xFF000FF70F00, 6, MovAadd, Src => B(0x000000003000), Lmem => B(0x00FF00000000), Op(O::DBL) => I(1), Split => B(0), K8 => B(0x0000000000FF), Src => B(0x0000F0000000)),
    p!(0x8E000B100800, 0xFF000FF70F00, 6, MovAadd, Src => B(0x000000003000), Lmem => B(0x00FF00000000), Op(O::DBL) => I(1), Split => B(0), Src => B(0x0000000000F0), Src => B(0x0000F0000000)),
    p!(0x8E0006140000, 0xFF000FF70000, 6, MovAadd, K8 => B(0x00000000FF00), Lmem => B(0x00FF00000000), Split => B(0), K8 => B(0x0000000000FF), Src => B(0x0000F0000000)),
    p!(0x8E000DEB080D, 0xFF000FFF0F0F, 6, MovMov, Xmem => B(0x00FC00000000), Op(O::DBL) => I(1), Src => B(0x000000003000), Split => B(0), Src => B(0x000000000030), Shr => I(1), Xmem => B(0x0003F0000000), Op(O::DUAL) => I(1)),
    p!(0x8E000EEB040D, 0xFF000FFF0F0F, 6, SubMov, Xmem => B(0x00FC00000000), Op(O::DUAL) => I(1), Src => B(0x00000000C000), Src => B(0x000000003000), Split => B(0), Src => B(0x000000000030), Shr => I(1), Xmem => B(0x0003F0000000), Op(O::DUAL) => I(1)),
    p!(0x8E000EEB000D, 0xFF000FFF0F0F, 6, AddMov, Xmem => B(0x00FC00000000), Op(O::DUAL) => I(1), Src => B(0x00000000C000), Src => B(0x000000003000), Split => B(0), Src => B(0x000000000030), Shr => I(1), Xmem => B(0x0003F0000000), Op(O::DUAL) => I(1)),
    p!(0x8E000EEB0408, 0xFF000FFF0F0F, 6, SubMov, Xmem => B(0x00FC00000000), Op(O::DUAL) => I(1), Src => B(0x00000000C000), Src => B(0x000000003000), Split => B(0), Src => B(0x000000000030), Xmem => B(0x0003F0000000), Op(O::DBL) => I(1)),
    p!(0x8E000EEB0008, 0xFF000FFF0F0F, 6, AddMov, Xmem => B(0x00FC00000000), Op(O::DUAL) => I(1), Src => B(0x00000000C000), Src => B(0x000000003000), Split => B(0), Src => B(0x000000000030), Xmem => B(0x0003F0000000), Op(O::DBL) => I(1)),
    p!(0x9000, 0xFF00, 2, Mov2, XReg => B(0x00F0), XReg => B(0x000F)),
    p!(0x9100, 0xFF00, 2, B, Src => B(0x0003)),
    p!(0x9200, 0xFF00, 2, Call, Src => B(0x0003)),
    p!(0x9400, 0xFF00, 2, Reset),
    p!(0x9500, 0xFF80, 2, Intr, K8 => B(0x001F)),
    p!(0x9580, 0xFF80, 2, Trap, K8 => B(0x001F)),
    p!(0x9600, 0xFF80, 2, Xcc, Cond => B(0x007F)),
    p!(0x9680, 0xFF80, 2, Xccpart, Cond => B(0x007F)),
    p!(0x9E00, 0xFF80, 2, Xcc, Cond => B(0x007F), UserParallel => B(0)),
    p!(0x9E80, 0xFF80, 2, Xccpart, Cond => B(0x007F)),
    p!(0x9F00, 0xFF80, 2, Xcc, Cond => B(0x007F)),
    p!(0x9F80, 0xFF80, 2, Xccpart, Cond => B(0x007F)),
    p!(0xA000, 0xF000, 2, Mov2, Smem => B(0x00FF), Src => B(0x0F00)),
    p!(0xB000, 0xFC00, 2, Mov2, Smem => B(0x00FF), Shl16 => B(0), Src => B(0x0300)),
    p!(0xB400, 0xFF00, 2, Amar1, Smem => B(0x00FF)),
    p!(0xB500, 0xFF00, 2, Psh1, Smem => B(0x00FF)),
    p!(0xB600, 0xFF00, 2, Delay, Smem => B(0x00FF)),
    p!(0xB700, 0xFF00, 2, Psh1, Lmem => B(0x00FF), Op(O::DBL) => I(1)),
    p!(0xB800, 0xFF00, 2, Pop1, Lmem => B(0x00FF), Op(O::DBL) => I(1)),
    p!(0xBB00, 0xFF00, 2, Pop1, Smem => B(0x00FF)),
    p!(0xBC00, 0xFC00, 2, Mov2, Src => B(0x0300), Op(O::HI) => I(1), Smem => B(0x00FF)),
    p!(0xC000, 0xF000, 2, Mov2, Src => B(0x0F00), Smem => B(0x00FF)),
    p!(0xD00000, 0xFF0040, 3, Macmz, Smem => B(0x00FF00), Op(O::T3) => B(0x000080), Cmem => B(0x000003), Src => B(0x000030)),
    p!(0xD00040, 0xFF0040, 3, Macmrz, Smem => B(0x00FF00), Op(O::T3) => B(0x000080), Cmem => B(0x000003), Src => B(0x000030)),
    p!(0xD10000, 0xFF000C, 3, Mpym3, Rename(N::Round) => B(0x000040), Smem => B(0x00FF00), Op(O::T3) => B(0x000080), Cmem => B(0x000003), Src => B(0x000030)),
    p!(0xD10004, 0xFF000C, 3, Macm3, Rename(N::Round) => B(0x000040), Smem => B(0x00FF00), Op(O::T3) => B(0x000080), Cmem => B(0x000003), Src => B(0x000030)),
    p!(0xD10008, 0xFF000C, 3, Masm3, Rename(N::Round) => B(0x000040), Smem => B(0x00FF00), Op(O::T3) => B(0x000080), Cmem => B(0x000003), Src => B(0x000030)),
    p!(0xD20000, 0xFF000C, 3, Macm2, Rename(N::Round) => B(0x000040), Smem => B(0x00FF00), Op(O::T3) => B(0x000080), Src => B(0x000003), OptSrc => B(0x000030)),
    p!(0xD20004, 0xFF000C, 3, Masm2, Rename(N::Round) => B(0x000040), Smem => B(0x00FF00), Op(O::T3) => B(0x000080), Src => B(0x000003), OptSrc => B(0x000030)),
    p!(0xD20008, 0xFF000C, 3, Sqam2, Rename(N::Round) => B(0x000040), Smem => B(0x00FF00), Op(O::T3) => B(0x000080), Src => B(0x000003), OptSrc => B(0x000030)),
    p!(0xD2000C, 0xFF000C, 3, Sqsm2, Rename(N::Round) => B(0x000040), Smem => B(0x00FF00), Op(O::T3) => B(0x000080), Src => B(0x000003), OptSrc => B(0x000030)),
    p!(0xD30000, 0xFF000C, 3, Mpym2, Rename(N::Round) => B(0x000040), Smem => B(0x00FF00), Op(O::T3) => B(0x000080), Src => B(0x000003), OptSrc => B(0x000030)),
    p!(0xD30008, 0xFF000C, 3, Sqrm, Rename(N::Round) => B(0x000040), Smem => B(0x00FF00), Op(O::T3) => B(0x000080), Src => B(0x000030)),
    p!(0xD30004, 0xFF0004, 3, Mpym3, Rename(N::Round) => B(0x000040), Rename(N::Unsigned) => B(0x000008), Smem => B(0x00FF00), Op(O::T3) => B(0x000080), Tx => B(0x000003), Src => B(0x000030)),
    p!(0xD40000, 0xFF0000, 3, Macm3, Rename(N::Round) => B(0x000040), Smem => B(0x00FF00), Op(O::T3) => B(0x000080), Tx => B(0x00000C), Src => B(0x000003), OptSrc => B(0x000030)),
    p!(0xD50000, 0xFF0000, 3, Masm3, Rename(N::Round) => B(0x000040), Smem => B(0x00FF00), Op(O::T3) => B(0x000080), Tx => B(0x00000C), Src => B(0x000003), OptSrc => B(0x000030)),
    p!(0xD60000, 0xFF0000, 3, Add2, Smem => B(0x00FF00), Src => B(0x00000F), OptSrc => B(0x0000F0)),
    p!(0xD70000, 0xFF0000, 3, Sub2, Smem => B(0x00FF00), Src => B(0x00000F), OptSrc => B(0x0000F0)),
    p!(0xD80000, 0xFF0000, 3, Sub3, Src => B(0x00000F), Smem => B(0x00FF00), Src => B(0x0000F0)),
    p!(0xD90000, 0xFF0000, 3, And3, Smem => B(0x00FF00), Src => B(0x00000F), Src => B(0x0000F0)),
    p!(0xDA0000, 0xFF0000, 3, Or3, Smem => B(0x00FF00), Src => B(0x00000F), Src => B(0x0000F0)),
    p!(0xDB0000, 0xFF0000, 3, Xor3, Smem => B(0x00FF00), Src => B(0x00000F), Src => B(0x0000F0)),
    p!(0xDC0000, 0xFF0002, 3, Btst, K8 => B(0x0000F0), Smem => B(0x00FF00), TCx => B(0x000001)),
    p!(0xDC0002, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::DP) => B(0)),
    p!(0xDC0012, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::CDP) => B(0)),
    p!(0xDC0022, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::BSA01) => B(0)),
    p!(0xDC0032, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::BSA23) => B(0)),
    p!(0xDC0042, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::BSA45) => B(0)),
    p!(0xDC0052, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::BSA67) => B(0)),
    p!(0xDC0062, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::BSAC) => B(0)),
    p!(0xDC0072, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::SP) => B(0)),
    p!(0xDC0082, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::SSP) => B(0)),
    p!(0xDC0092, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::BK03) => B(0)),
    p!(0xDC00A2, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::BK47) => B(0)),
    p!(0xDC00B2, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::BKC) => B(0)),
    p!(0xDC00C2, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::DPH) => B(0)),
    p!(0xDC00D2, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::MDP05) => B(0)),
    p!(0xDC00E2, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::MDP67) => B(0)),
    p!(0xDC00F2, 0xFF00F3, 3, Mov2, Smem => B(0x00FF00), Fixed(R::PDP) => B(0)),
    p!(0xDC0003, 0xFF0073, 3, Mov2, Smem => B(0x00FF00), Fixed(R::CSR) => B(0)),
    p!(0xDC0013, 0xFF0073, 3, Mov2, Smem => B(0x00FF00), Fixed(R::BRC0) => B(0)),
    p!(0xDC0023, 0xFF0073, 3, Mov2, Smem => B(0x00FF00), Fixed(R::BRC1) => B(0)),
    p!(0xDC0033, 0xFF0073, 3, Mov2, Smem => B(0x00FF00), Fixed(R::TRN0) => B(0)),
    p!(0xDC0043, 0xFF0073, 3, Mov2, Smem => B(0x00FF00), Fixed(R::TRN1) => B(0)),
    p!(0xDD0000, 0xFF0003, 3, Add2, Smem => B(0x00FF00), ShlTx => B(0x00000C), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0xDD0001, 0xFF0003, 3, Sub2, Smem => B(0x00FF00), ShlTx => B(0x00000C), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0xDD0002, 0xFF0003, 3, Addsub2cc, Smem => B(0x00FF00), Src => B(0x0000C0), Tx => B(0x00000C), Fixed(R::TC1) => B(0), Fixed(R::TC2) => B(0), Src => B(0x000030)),
    p!(0xDD0003, 0xFF0003, 3, Mov2, Smem => B(0x00FF00), ShlTx => B(0x00000C), Op(O::RND) => B(0x000040), Src => B(0x000030)),
    p!(0xDE0000, 0xFF000F, 3, Addsubcc4, Smem => B(0x00FF00), Src => B(0x0000C0), Fixed(R::TC1) => B(0), Src => B(0x000030)),
    p!(0xDE0001, 0xFF000F, 3, Addsubcc4, Smem => B(0x00FF00), Src => B(0x0000C0), Fixed(R::TC2) => B(0), Src => B(0x000030)),
    p!(0xDE0002, 0xFF000F, 3, Addsubcc4, Smem => B(0x00FF00), Src => B(0x0000C0), Fixed(R::TC1) => B(0), Fixed(R::TC2) => B(0), Src => B(0x000030)),
    p!(0xDE0003, 0xFF000F, 3, Subc2, Smem => B(0x00FF00), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0xDE0004, 0xFF000F, 3, Add2, Smem => B(0x00FF00), Shl16 => B(0), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0xDE0005, 0xFF000F, 3, Sub2, Smem => B(0x00FF00), Shl16 => B(0), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0xDE0006, 0xFF000F, 3, Sub3, Src => B(0x0000C0), Smem => B(0x00FF00), Shl16 => B(0), Src => B(0x000030)),
    p!(0xDE0008, 0xFF000F, 3, Addsub, Tx => B(0x0000C0), Smem => B(0x00FF00), Src => B(0x000030)),
    p!(0xDE0009, 0xFF000F, 3, Subadd, Tx => B(0x0000C0), Smem => B(0x00FF00), Src => B(0x000030)),
    p!(0xDF0000, 0xFF000E, 3, Mov2, Smem => B(0x00FF00), Op(O::HB) => I(1), Op(O::UNS) => N_(0x000001), Src => B(0x0000F0)),
    p!(0xDF0002, 0xFF000E, 3, Mov2, Smem => B(0x00FF00), Op(O::LB) => I(1), Op(O::UNS) => N_(0x000001), Src => B(0x0000F0)),
    p!(0xDF0004, 0xFF000E, 3, Mov2, Smem => B(0x00FF00), Op(O::UNS) => B(0x000001), Src => B(0x000030)),
    p!(0xDF0008, 0xFF000E, 3, Add3, Smem => B(0x00FF00), Op(O::UNS) => B(0x000001), Fixed(R::CARRY) => B(0), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0xDF000A, 0xFF000E, 3, Sub3, Smem => B(0x00FF00), Op(O::UNS) => B(0x000001), Fixed(R::BORROW) => B(0), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0xDF000C, 0xFF000E, 3, Add2, Smem => B(0x00FF00), Op(O::UNS) => B(0x000001), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0xDF000E, 0xFF000E, 3, Sub2, Smem => B(0x00FF00), Op(O::UNS) => B(0x000001), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0xE00000, 0xFF0000, 3, Btst, Src => B(0x0000F0), Smem => B(0x00FF00), TCx => B(0x000001)),
    p!(0xE10000, 0xFF0000, 3, Mov2, Smem => B(0x00FF00), Op(O::LB) => I(1), ShlWOut => B(0x00003F), Src => B(0x0000C0)),
    p!(0xE20000, 0xFF0000, 3, Mov2, Smem => B(0x00FF00), Op(O::HB) => I(1), ShlWOut => B(0x00003F), Src => B(0x0000C0)),
    p!(0xE30000, 0xFF000E, 3, Btstset, K8 => B(0x0000F0), Smem => B(0x00FF00), Fixed(R::TC1) => B(0)),
    p!(0xE30002, 0xFF000E, 3, Btstset, K8 => B(0x0000F0), Smem => B(0x00FF00), Fixed(R::TC2) => B(0)),
    p!(0xE30004, 0xFF000E, 3, Btstclr, K8 => B(0x0000F0), Smem => B(0x00FF00), Fixed(R::TC1) => B(0)),
    p!(0xE30006, 0xFF000E, 3, Btstclr, K8 => B(0x0000F0), Smem => B(0x00FF00), Fixed(R::TC2) => B(0)),
    p!(0xE30008, 0xFF000E, 3, Btstnot, K8 => B(0x0000F0), Smem => B(0x00FF00), Fixed(R::TC1) => B(0)),
    p!(0xE3000A, 0xFF000E, 3, Btstnot, K8 => B(0x0000F0), Smem => B(0x00FF00), Fixed(R::TC2) => B(0)),
    p!(0xE3000C, 0xFF000F, 3, Bset2, Src => B(0x0000F0), Smem => B(0x00FF00)),
    p!(0xE3000D, 0xFF000F, 3, Bclr2, Src => B(0x0000F0), Smem => B(0x00FF00)),
    p!(0xE3000E, 0xFF000E, 3, Bnot, Src => B(0x0000F0), Smem => B(0x00FF00)),
    p!(0xE40000, 0xFF0004, 3, Psh2, Src => B(0x0000F0), Smem => B(0x00FF00)),
    p!(0xE40004, 0xFF0004, 3, Pop2, Src => B(0x0000F0), Smem => B(0x00FF00)),
    p!(0xE50004, 0xFF000D, 3, Mov2, Src => B(0x0000F0), Smem => B(0x00FF00), Op(O::HB) => I(1)),
    p!(0xE50005, 0xFF000D, 3, Mov2, Src => B(0x0000F0), Smem => B(0x00FF00), Op(O::LB) => I(1)),
    p!(0xE50008, 0xFF00FC, 3, Mov2, Fixed(R::DP) => B(0), Smem => B(0x00FF00)),
    p!(0xE50018, 0xFF00FC, 3, Mov2, Fixed(R::CDP) => B(0), Smem => B(0x00FF00)),
    p!(0xE50028, 0xFF00FC, 3, Mov2, Fixed(R::BSA01) => B(0), Smem => B(0x00FF00)),
    p!(0xE50038, 0xFF00FC, 3, Mov2, Fixed(R::BSA23) => B(0), Smem => B(0x00FF00)),
    p!(0xE50048, 0xFF00FC, 3, Mov2, Fixed(R::BSA45) => B(0), Smem => B(0x00FF00)),
    p!(0xE50058, 0xFF00FC, 3, Mov2, Fixed(R::BSA67) => B(0), Smem => B(0x00FF00)),
    p!(0xE50068, 0xFF00FC, 3, Mov2, Fixed(R::BSAC) => B(0), Smem => B(0x00FF00)),
    p!(0xE50078, 0xFF00FC, 3, Mov2, Fixed(R::SP) => B(0), Smem => B(0x00FF00)),
    p!(0xE50088, 0xFF00FC, 3, Mov2, Fixed(R::SSP) => B(0), Smem => B(0x00FF00)),
    p!(0xE50098, 0xFF00FC, 3, Mov2, Fixed(R::BK03) => B(0), Smem => B(0x00FF00)),
    p!(0xE500A8, 0xFF00FC, 3, Mov2, Fixed(R::BK47) => B(0), Smem => B(0x00FF00)),
    p!(0xE500B8, 0xFF00FC, 3, Mov2, Fixed(R::BKC) => B(0), Smem => B(0x00FF00)),
    p!(0xE500C8, 0xFF00FC, 3, Mov2, Fixed(R::DPH) => B(0), Smem => B(0x00FF00)),
    p!(0xE500D8, 0xFF00FC, 3, Mov2, Fixed(R::MDP05) => B(0), Smem => B(0x00FF00)),
    p!(0xE500E8, 0xFF00FC, 3, Mov2, Fixed(R::MDP67) => B(0), Smem => B(0x00FF00)),
    p!(0xE500F8, 0xFF00FC, 3, Mov2, Fixed(R::PDP) => B(0), Smem => B(0x00FF00)),
    p!(0xE5000C, 0xFF007C, 3, Mov2, Fixed(R::CSR) => B(0), Smem => B(0x00FF00)),
    p!(0xE5001C, 0xFF007C, 3, Mov2, Fixed(R::BRC0) => B(0), Smem => B(0x00FF00)),
    p!(0xE5002C, 0xFF007C, 3, Mov2, Fixed(R::BRC1) => B(0), Smem => B(0x00FF00)),
    p!(0xE5003C, 0xFF007C, 3, Mov2, Fixed(R::TRN0) => B(0), Smem => B(0x00FF00)),
    p!(0xE5004C, 0xFF007C, 3, Mov2, Fixed(R::TRN1) => B(0), Smem => B(0x00FF00)),
    p!(0xE60000, 0xFF0000, 3, Mov2, SK8 => B(0x0000FF), Smem => B(0x00FF00)),
    p!(0xE70000, 0xFF000C, 3, Mov2, Src => B(0x0000C0), ShlTx => B(0x000030), Smem => B(0x00FF00)),
    p!(0xE70008, 0xFF000C, 3, Mov2, Src => B(0x0000C0), ShlTx => B(0x000030), Op(O::HI) => I(1), Op(O::RND) => B(0x000001), Smem => B(0x00FF00)),
    p!(0xE7000C, 0xFF000C, 3, Mov2, Src => B(0x0000C0), ShlTx => B(0x000030), Op(O::SAT) => I(1), Op(O::HI) => I(1), Op(O::RND) => B(0x000001), Op(O::UNS) => B(0x000002), Smem => B(0x00FF00)),
    p!(0xE80000, 0xFF0004, 3, Mov2, Src => B(0x0000C0), Op(O::HI) => I(1), Op(O::RND) => B(0x000001), Smem => B(0x00FF00)),
    p!(0xE80004, 0xFF0004, 3, Mov2, Src => B(0x0000C0), Op(O::SAT) => I(1), Op(O::HI) => I(1), Op(O::RND) => B(0x000001), Op(O::UNS) => B(0x000002), Smem => B(0x00FF00)),
    p!(0xE90000, 0xFF0000, 3, Mov2, Src => B(0x0000C0), ShlW => B(0x00003F), Smem => B(0x00FF00)),
    p!(0xEA0000, 0xFF0000, 3, Mov2, Src => B(0x0000C0), ShlW => B(0x00003F), Op(O::HI) => I(1), Smem => B(0x00FF00)),
    p!(0xEB0004, 0xFF000D, 3, Mov2, Fixed(R::RETA) => B(0), Lmem => B(0x00FF00), Op(O::DBL) => I(1)),
    p!(0xEB0005, 0xFF000D, 3, Mov2, XReg => B(0x0000F0), Lmem => B(0x00FF00), Op(O::DBL) => I(1)),
    p!(0xEB0008, 0xFF000D, 3, Mov2, Src => B(0x000030), Lmem => B(0x00FF00), Op(O::DBL) => I(1)),
    p!(0xEB0009, 0xFF000D, 3, Mov2, Src => B(0x000030), Op(O::SAT) => I(1), Op(O::UNS) => B(0x000002), Lmem => B(0x00FF00), Op(O::DBL) => I(1)),
    p!(0xEB000C, 0xFF000F, 3, Mov2, Src => B(0x0000F0), Op(O::PAIR) => I(1), Lmem => B(0x00FF00), Op(O::DBL) => I(1)),
    p!(0xEB000D, 0xFF000F, 3, Mov2, Src => B(0x0000F0), Shr => I(1), Lmem => B(0x00FF00), Op(O::DUAL) => I(1)),
    p!(0xEB000E, 0xFF000F, 3, Mov2, Src => B(0x0000F0), Op(O::HI) => I(1), Op(O::PAIR) => I(1), Lmem => B(0x00FF00), Op(O::DBL) => I(1)),
    p!(0xEB000F, 0xFF000F, 3, Mov2, Src => B(0x0000F0), Op(O::LO) => I(1), Op(O::PAIR) => I(1), Lmem => B(0x00FF00), Op(O::DBL) => I(1)),
    p!(0xEC0000, 0xFF000E, 3, Bset2, Baddr => B(0x00FF00), Src => B(0x0000F0)),
    p!(0xEC0002, 0xFF000E, 3, Bclr2, Baddr => B(0x00FF00), Src => B(0x0000F0)),
    p!(0xEC0004, 0xFF000E, 3, Btstp, Baddr => B(0x00FF00), Src => B(0x0000F0)),
    p!(0xEC0006, 0xFF000E, 3, Bnot, Baddr => B(0x00FF00), Src => B(0x0000F0)),
    p!(0xEC0008, 0xFF000E, 3, Btst, Baddr => B(0x00FF00), Src => B(0x0000F0), TCx => B(0x000001)),
    p!(0xEC000E, 0xFF000F, 3, Amar2, Smem => B(0x00FF00), XReg => B(0x0000F0)),
    p!(0xED0000, 0xFF000E, 3, Add2, Lmem => B(0x00FF00), Op(O::DBL) => I(1), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0xED0002, 0xFF000E, 3, Sub2, Lmem => B(0x00FF00), Op(O::DBL) => I(1), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0xED0004, 0xFF000E, 3, Sub3, Src => B(0x0000C0), Lmem => B(0x00FF00), Op(O::DBL) => I(1), Src => B(0x000030)),
    p!(0xED0006, 0xFF000E, 3, Mov2, Lmem => B(0x00FF00), Op(O::DBL) => I(1), Fixed(R::RETA) => B(0)),
    p!(0xED0008, 0xFF000E, 3, Mov2, Rename(N::Wide40) => B(0x000001), Lmem => B(0x00FF00), Op(O::DBL) => I(1), Src => B(0x000030)),
    p!(0xED000A, 0xFF000E, 3, Mov2, Lmem => B(0x00FF00), Op(O::DBL) => I(1), Src => B(0x000030), Op(O::HI) => I(1), Op(O::PAIR) => I(1)),
    p!(0xED000C, 0xFF000E, 3, Mov2, Lmem => B(0x00FF00), Op(O::DBL) => I(1), Src => B(0x000030), Op(O::LO) => I(1), Op(O::PAIR) => I(1)),
    p!(0xED000E, 0xFF000F, 3, Mov2, Lmem => B(0x00FF00), Op(O::DBL) => I(1), Src => B(0x0000F0), Op(O::PAIR) => I(1)),
    p!(0xED000F, 0xFF000F, 3, Mov2, Lmem => B(0x00FF00), Op(O::DBL) => I(1), XReg => B(0x0000F0)),
    p!(0xEE0000, 0xFF000E, 3, Add2, Lmem => B(0x00FF00), Op(O::DUAL) => I(1), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0xEE0002, 0xFF000E, 3, Sub2, Lmem => B(0x00FF00), Op(O::DUAL) => I(1), Src => B(0x0000C0), OptSrc => B(0x000030)),
    p!(0xEE0004, 0xFF000E, 3, Sub3, Lmem => B(0x00FF00), Op(O::DUAL) => I(1), Src => B(0x0000C0), Src => B(0x000030)),
    p!(0xEE0006, 0xFF000E, 3, Sub3, Lmem => B(0x00FF00), Op(O::DUAL) => I(1), Tx => B(0x0000C0), Src => B(0x000030)),
    p!(0xEE0008, 0xFF000E, 3, Add3, Lmem => B(0x00FF00), Op(O::DUAL) => I(1), Tx => B(0x0000C0), Src => B(0x000030)),
    p!(0xEE000A, 0xFF000E, 3, Sub3, Tx => B(0x0000C0), Lmem => B(0x00FF00), Op(O::DUAL) => I(1), Src => B(0x000030)),
    p!(0xEE000C, 0xFF000E, 3, Addsub, Tx => B(0x0000C0), Lmem => B(0x00FF00), Op(O::DUAL) => I(1), Src => B(0x000030)),
    p!(0xEE000E, 0xFF000E, 3, Subadd, Tx => B(0x0000C0), Lmem => B(0x00FF00), Op(O::DUAL) => I(1), Src => B(0x000030)),
    p!(0xEF0000, 0xFF000C, 3, Mov2, Cmem => B(0x000003), Smem => B(0x00FF00)),
    p!(0xEF0004, 0xFF000C, 3, Mov2, Smem => B(0x00FF00), Cmem => B(0x000003)),
    p!(0xEF0008, 0xFF000C, 3, Mov2, Cmem => B(0x000003), Lmem => B(0x00FF00), Op(O::DBL) => I(1)),
    p!(0xEF000C, 0xFF000C, 3, Mov2, Lmem => B(0x00FF00), Op(O::DBL) => I(1), Cmem => B(0x000003)),
    p!(0xF0000000, 0xFF000000, 4, Cmp, Smem => B(0x00FF0000), EqK16 => B(0x0000FFFF), Fixed(R::TC1) => B(0)),
    p!(0xF1000000, 0xFF000000, 4, Cmp, Smem => B(0x00FF0000), EqK16 => B(0x0000FFFF), Fixed(R::TC2) => B(0)),
    p!(0xF2000000, 0xFF000000, 4, Band, Smem => B(0x00FF0000), K16 => B(0x0000FFFF), Fixed(R::TC1) => B(0)),
    p!(0xF3000000, 0xFF000000, 4, Band, Smem => B(0x00FF0000), K16 => B(0x0000FFFF), Fixed(R::TC2) => B(0)),
    p!(0xF4000000, 0xFF000000, 4, And2, K16 => B(0x0000FFFF), Smem => B(0x00FF0000)),
    p!(0xF5000000, 0xFF000000, 4, Or2, K16 => B(0x0000FFFF), Smem => B(0x00FF0000)),
    p!(0xF6000000, 0xFF000000, 4, Xor2, K16 => B(0x0000FFFF), Smem => B(0x00FF0000)),
    p!(0xF7000000, 0xFF000000, 4, Add2, SK16 => B(0x0000FFFF), Smem => B(0x00FF0000)),
    p!(0xF8000000, 0xFF000004, 4, Mpymk, Rename(N::Round) => B(0x00000001), Smem => B(0x00FF0000), Op(O::T3) => B(0x00000002), SK8 => B(0x0000FF00), Src => B(0x00000030)),
    p!(0xF8000004, 0xFF000004, 4, Macmk3, Rename(N::Round) => B(0x00000001), Smem => B(0x00FF0000), Op(O::T3) => B(0x00000002), SK8 => B(0x0000FF00), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0xF9000000, 0xFF00000C, 4, Add2, Smem => B(0x00FF0000), Op(O::UNS) => B(0x00008000), ShlWOut => B(0x00003F00), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0xF9000004, 0xFF00000C, 4, Sub2, Smem => B(0x00FF0000), Op(O::UNS) => B(0x00008000), ShlWOut => B(0x00003F00), Src => B(0x000000C0), OptSrc => B(0x00000030)),
    p!(0xF9000008, 0xFF00000C, 4, Mov2, Smem => B(0x00FF0000), Op(O::UNS) => B(0x00008000), ShlWOut => B(0x00003F00), Src => B(0x00000030)),
    p!(0xFA000000, 0xFF000004, 4, Mov2, Src => B(0x000000C0), ShlW => B(0x00003F00), Op(O::HI) => I(1), Op(O::RND) => B(0x00000001), Smem => B(0x00FF0000)),
    p!(0xFA000004, 0xFF000004, 4, Mov2, Src => B(0x000000C0), ShlW => B(0x00003F00), Op(O::SAT) => I(1), Op(O::HI) => I(1), Op(O::RND) => B(0x00000001), Op(O::UNS) => B(0x00008000), Smem => B(0x00FF0000)),
    p!(0xFB000000, 0xFF000000, 4, Mov2, SK16 => B(0x0000FFFF), Smem => B(0x00FF0000)),
    p!(0xFC000000, 0xFF000000, 4, Bcc, L16 => B(0x0000FFFF), ArnMod => B(0x00FF0000), Neq0 => I(1)),
];

use regmodel_core::{RegisterModel as _, WidthSet};
use serde::{Deserialize, Serialize};

use crate::{Register, X86};

const AX_FAMILY: &[Register] = &[
    Register::Al,
    Register::Ah,
    Register::Ax,
    Register::Eax,
    Register::Rax,
];

const BX_FAMILY: &[Register] = &[
    Register::Bl,
    Register::Bh,
    Register::Bx,
    Register::Ebx,
    Register::Rbx,
];

const CX_FAMILY: &[Register] = &[
    Register::Cl,
    Register::Ch,
    Register::Cx,
    Register::Ecx,
    Register::Rcx,
];

const DX_FAMILY: &[Register] = &[
    Register::Dl,
    Register::Dh,
    Register::Dx,
    Register::Edx,
    Register::Rdx,
];

const DI_FAMILY: &[Register] = &[Register::Di, Register::Edi, Register::Rdi];
const SI_FAMILY: &[Register] = &[Register::Si, Register::Esi, Register::Rsi];
const BP_FAMILY: &[Register] = &[Register::Bp, Register::Ebp, Register::Rbp];
const SP_FAMILY: &[Register] = &[Register::Sp, Register::Esp, Register::Rsp];
const IP_FAMILY: &[Register] = &[Register::Ip, Register::Eip, Register::Rip];

/// A family of x86 registers.
///
/// Each family groups the registers that name the same physical storage at
/// different widths, and is named after its 16-bit member.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Accumulator (`al`, `ah`, `ax`, `eax`, `rax`).
    Ax,

    /// Base (`bl`, `bh`, `bx`, `ebx`, `rbx`).
    Bx,

    /// Count (`cl`, `ch`, `cx`, `ecx`, `rcx`).
    Cx,

    /// Data (`dl`, `dh`, `dx`, `edx`, `rdx`).
    Dx,

    /// Destination index (`di`, `edi`, `rdi`).
    Di,

    /// Source index (`si`, `esi`, `rsi`).
    Si,

    /// Base pointer (`bp`, `ebp`, `rbp`).
    Bp,

    /// Stack pointer (`sp`, `esp`, `rsp`).
    Sp,

    /// Instruction pointer (`ip`, `eip`, `rip`).
    Ip,
}

impl Family {
    /// Every register family.
    pub const ALL: [Family; 9] = [
        Family::Ax,
        Family::Bx,
        Family::Cx,
        Family::Dx,
        Family::Di,
        Family::Si,
        Family::Bp,
        Family::Sp,
        Family::Ip,
    ];

    /// Returns the members of the family in increasing width order.
    ///
    /// The accumulator, base, count and data families list two 8-bit
    /// members, the low byte first.
    pub const fn members(self) -> &'static [Register] {
        match self {
            Family::Ax => AX_FAMILY,
            Family::Bx => BX_FAMILY,
            Family::Cx => CX_FAMILY,
            Family::Dx => DX_FAMILY,
            Family::Di => DI_FAMILY,
            Family::Si => SI_FAMILY,
            Family::Bp => BP_FAMILY,
            Family::Sp => SP_FAMILY,
            Family::Ip => IP_FAMILY,
        }
    }

    /// Returns the name of the family, which is the name of its 16-bit
    /// member.
    pub const fn name(self) -> &'static str {
        match self {
            Family::Ax => "ax",
            Family::Bx => "bx",
            Family::Cx => "cx",
            Family::Dx => "dx",
            Family::Di => "di",
            Family::Si => "si",
            Family::Bp => "bp",
            Family::Sp => "sp",
            Family::Ip => "ip",
        }
    }

    /// Returns the widths at which the family can be accessed.
    pub fn widths(self) -> WidthSet {
        X86::widths(self)
    }

    /// Checks if the family has a separately addressable high byte.
    pub fn has_high_byte(self) -> bool {
        self.members()
            .iter()
            .any(|member| member.is_high_byte())
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.name())
    }
}

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regmodel_core::{RegisterError, RegisterModel as _, Width};
use serde::{Deserialize, Serialize};

use crate::{Family, Generation, X86};

/// A general-purpose x86 register.
///
/// Covers the 16-bit, 32-bit and 64-bit generations of the register file,
/// including the 8-bit low and high byte registers of the accumulator, base,
/// count and data registers.
#[expect(missing_docs)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Register {
    // 8-bit
    Al,
    Ah,
    Bl,
    Bh,
    Cl,
    Ch,
    Dl,
    Dh,

    // 16-bit
    Ax,
    Bx,
    Cx,
    Dx,
    Di,
    Si,
    Bp,
    Sp,
    Ip,

    // 32-bit
    Eax,
    Ebx,
    Ecx,
    Edx,
    Edi,
    Esi,
    Ebp,
    Esp,
    Eip,

    // 64-bit
    Rax,
    Rbx,
    Rcx,
    Rdx,
    Rdi,
    Rsi,
    Rbp,
    Rsp,
    Rip,
}

static BY_NAME: Lazy<IndexMap<&'static str, Register>> = Lazy::new(|| {
    Register::ALL
        .iter()
        .map(|&register| (register.name(), register))
        .collect()
});

impl Register {
    /// Every register of the catalog.
    pub const ALL: [Register; 35] = [
        Register::Al,
        Register::Ah,
        Register::Bl,
        Register::Bh,
        Register::Cl,
        Register::Ch,
        Register::Dl,
        Register::Dh,
        Register::Ax,
        Register::Bx,
        Register::Cx,
        Register::Dx,
        Register::Di,
        Register::Si,
        Register::Bp,
        Register::Sp,
        Register::Ip,
        Register::Eax,
        Register::Ebx,
        Register::Ecx,
        Register::Edx,
        Register::Edi,
        Register::Esi,
        Register::Ebp,
        Register::Esp,
        Register::Eip,
        Register::Rax,
        Register::Rbx,
        Register::Rcx,
        Register::Rdx,
        Register::Rdi,
        Register::Rsi,
        Register::Rbp,
        Register::Rsp,
        Register::Rip,
    ];

    /// Returns the canonical lowercase name of the register.
    pub const fn name(self) -> &'static str {
        match self {
            Register::Al => "al",
            Register::Ah => "ah",
            Register::Bl => "bl",
            Register::Bh => "bh",
            Register::Cl => "cl",
            Register::Ch => "ch",
            Register::Dl => "dl",
            Register::Dh => "dh",
            Register::Ax => "ax",
            Register::Bx => "bx",
            Register::Cx => "cx",
            Register::Dx => "dx",
            Register::Di => "di",
            Register::Si => "si",
            Register::Bp => "bp",
            Register::Sp => "sp",
            Register::Ip => "ip",
            Register::Eax => "eax",
            Register::Ebx => "ebx",
            Register::Ecx => "ecx",
            Register::Edx => "edx",
            Register::Edi => "edi",
            Register::Esi => "esi",
            Register::Ebp => "ebp",
            Register::Esp => "esp",
            Register::Eip => "eip",
            Register::Rax => "rax",
            Register::Rbx => "rbx",
            Register::Rcx => "rcx",
            Register::Rdx => "rdx",
            Register::Rdi => "rdi",
            Register::Rsi => "rsi",
            Register::Rbp => "rbp",
            Register::Rsp => "rsp",
            Register::Rip => "rip",
        }
    }

    /// Returns the width of the register.
    pub const fn width(self) -> Width {
        use Register::*;

        match self {
            Al | Ah | Bl | Bh | Cl | Ch | Dl | Dh => Width::Byte,
            Ax | Bx | Cx | Dx | Di | Si | Bp | Sp | Ip => Width::Word,
            Eax | Ebx | Ecx | Edx | Edi | Esi | Ebp | Esp | Eip => Width::Long,
            Rax | Rbx | Rcx | Rdx | Rdi | Rsi | Rbp | Rsp | Rip => Width::Quad,
        }
    }

    /// Checks if the register is the high byte of a 16-bit register
    /// (`ah`, `bh`, `ch`, `dh`).
    pub const fn is_high_byte(self) -> bool {
        matches!(
            self,
            Register::Ah | Register::Bh | Register::Ch | Register::Dh
        )
    }

    /// Looks up a register by name.
    ///
    /// The lookup is case-insensitive and accepts an optional AT&T `%`
    /// prefix, so `"eax"`, `"EAX"` and `"%eax"` all name [`Register::Eax`].
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let name = name.strip_prefix('%').unwrap_or(name);

        BY_NAME.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Returns the family the register belongs to.
    ///
    /// # Panics
    ///
    /// Panics if the register has no family, which would be a defect in the
    /// catalog.
    pub fn family(self) -> Family {
        X86::family_of(self)
    }

    /// Returns the family the register belongs to, or an error if it has
    /// none.
    pub fn try_family(self) -> Result<Family, RegisterError> {
        X86::try_family_of(self)
    }

    /// Returns all registers sharing physical storage with this one,
    /// including itself.
    pub fn family_members(self) -> &'static [Register] {
        self.family().members()
    }

    /// Returns the member of this register's family with the given width.
    ///
    /// The register itself is returned if it already has the requested
    /// width. At the 8-bit tier the low byte is preferred, so the 8-bit
    /// sibling of `bx` is `bl`. Returns `None` if the family has no member
    /// of that width, e.g. the 8-bit sibling of `ip`.
    pub fn sibling(self, width: Width) -> Option<Register> {
        X86::sibling_of(self, width)
    }

    /// Like [`sibling`](Self::sibling), but reports absence as an error.
    pub fn require_sibling(self, width: Width) -> Result<Register, RegisterError> {
        X86::require_sibling(self, width)
    }

    /// Returns the head of the register's family for the given generation,
    /// i.e. its sibling at the generation's native width.
    ///
    /// For example, the head of the `bx` family on x86-64 is `rbx`, and on
    /// x86-32 it is `ebx`.
    pub fn head(self, generation: Generation) -> Option<Register> {
        self.sibling(generation.native_width())
    }

    /// Checks if this register shares physical storage with `other`.
    ///
    /// `al` aliases `ax`, `eax` and `rax`, but not `ah`.
    pub fn aliases(self, other: Register) -> bool {
        X86::aliases(self, other)
    }
}

impl regmodel_core::Register for Register {
    fn name(self) -> &'static str {
        Register::name(self)
    }

    fn width(self) -> Width {
        Register::width(self)
    }

    fn is_high_byte(self) -> bool {
        Register::is_high_byte(self)
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl std::str::FromStr for Register {
    type Err = RegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_name(s) {
            Some(register) => Ok(register),
            None => {
                tracing::trace!(name = s, "unknown register");
                Err(RegisterError::UnknownRegister(s.to_owned()))
            }
        }
    }
}

#[cfg(test)]
#[path = "register_tests.rs"]
mod tests;

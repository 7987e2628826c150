//! x86 general-purpose register definitions.
//!
//! The catalog holds the 35 general-purpose registers of the 16-bit, 32-bit
//! and 64-bit generations, grouped into nine families:
//!
//! | Family | Members                      |
//! |--------|------------------------------|
//! | `ax`   | `al`, `ah`, `ax`, `eax`, `rax` |
//! | `bx`   | `bl`, `bh`, `bx`, `ebx`, `rbx` |
//! | `cx`   | `cl`, `ch`, `cx`, `ecx`, `rcx` |
//! | `dx`   | `dl`, `dh`, `dx`, `edx`, `rdx` |
//! | `di`   | `di`, `edi`, `rdi`             |
//! | `si`   | `si`, `esi`, `rsi`             |
//! | `bp`   | `bp`, `ebp`, `rbp`             |
//! | `sp`   | `sp`, `esp`, `rsp`             |
//! | `ip`   | `ip`, `eip`, `rip`             |

mod family;
mod generation;
mod register;

use regmodel_core::{RegisterModel, Width};

pub use self::{family::Family, generation::Generation, register::Register};

/// The x86 register model.
#[derive(Debug)]
pub struct X86;

impl RegisterModel for X86 {
    type Register = Register;
    type Family = Family;

    fn registers() -> &'static [Register] {
        &Register::ALL
    }

    fn families() -> &'static [Family] {
        &Family::ALL
    }

    fn members(family: Family) -> &'static [Register] {
        family.members()
    }
}

/// Returns the members of the family the register belongs to.
///
/// # Panics
///
/// Panics if the register has no family, which would be a defect in the
/// catalog.
pub fn family_of(register: Register) -> &'static [Register] {
    register.family_members()
}

/// Returns the member of the register's family with the given width, or
/// `None` if the family has no member of that width.
///
/// See [`Register::sibling`].
pub fn sibling_of(register: Register, width: Width) -> Option<Register> {
    register.sibling(width)
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;

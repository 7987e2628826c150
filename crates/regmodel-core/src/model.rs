#![doc = include_str!("../docs/model.md")]

use std::fmt::{Debug, Display};

use crate::{CatalogError, RegisterError, Width, WidthSet};

/// A general-purpose register of a specific architecture.
///
/// Implementors are expected to be fieldless enums, so that value equality
/// is register identity.
pub trait Register
where
    Self: Debug + Display + Clone + Copy + PartialEq + Eq + 'static,
{
    /// Returns the canonical lowercase name of the register.
    fn name(self) -> &'static str;

    /// Returns the width of the register.
    fn width(self) -> Width;

    /// Checks if the register is the high byte of a 16-bit register.
    ///
    /// # Architecture-specific
    ///
    /// - **x86**: `ah`, `bh`, `ch`, `dh`
    fn is_high_byte(self) -> bool {
        false
    }
}

/// Defines a closed register catalog and its grouping into families.
///
/// Only the catalog itself must be provided; family lookup, sibling
/// resolution and validation are derived from it.
pub trait RegisterModel {
    /// The register type of the architecture.
    type Register: Register;

    /// Identifies a family of registers sharing the same physical storage.
    type Family: Debug + Display + Clone + Copy + PartialEq + Eq + 'static;

    /// Returns every register of the catalog.
    fn registers() -> &'static [Self::Register];

    /// Returns every family of the catalog.
    fn families() -> &'static [Self::Family];

    /// Returns the members of a family.
    ///
    /// Members are listed in non-decreasing width order. Where a family
    /// holds both halves of a 16-bit register, the low byte is listed before
    /// the high byte.
    fn members(family: Self::Family) -> &'static [Self::Register];

    /// Returns the widths at which a family can be accessed.
    fn widths(family: Self::Family) -> WidthSet {
        Self::members(family)
            .iter()
            .map(|member| member.width())
            .collect()
    }

    /// Returns the family the register belongs to.
    ///
    /// Fails with [`RegisterError::NoFamily`] if no family contains the
    /// register, which can only happen with a malformed catalog.
    fn try_family_of(register: Self::Register) -> Result<Self::Family, RegisterError> {
        Self::families()
            .iter()
            .copied()
            .find(|&family| Self::members(family).contains(&register))
            .ok_or(RegisterError::NoFamily(register.name()))
    }

    /// Returns the family the register belongs to.
    ///
    /// # Panics
    ///
    /// Panics if no family contains the register. This is a defect in the
    /// catalog, not a recoverable condition.
    fn family_of(register: Self::Register) -> Self::Family {
        match Self::try_family_of(register) {
            Ok(family) => family,
            Err(err) => {
                tracing::error!(%register, "register catalog is malformed");
                panic!("{err}");
            }
        }
    }

    /// Returns the member of the register's family with the given width.
    ///
    /// The register's family is always looked up first. Resolution rules,
    /// in order:
    ///
    /// 1. If the register itself has the requested width, it is returned.
    /// 2. Otherwise the family members of the requested width are
    ///    considered, and a low byte is preferred over a high byte, so the
    ///    8-bit sibling of `bx` is `bl`, never `bh`.
    /// 3. If no member has the requested width, `None` is returned.
    ///
    /// # Panics
    ///
    /// Panics if the register has no family (see [`family_of`]).
    ///
    /// [`family_of`]: Self::family_of
    fn sibling_of(register: Self::Register, width: Width) -> Option<Self::Register> {
        let family = Self::family_of(register);

        if register.width() == width {
            return Some(register);
        }

        let sibling = Self::members(family)
            .iter()
            .copied()
            .filter(|member| member.width() == width)
            .min_by_key(|member| member.is_high_byte());

        if sibling.is_none() {
            tracing::trace!(%register, %family, %width, "no sibling at width");
        }

        sibling
    }

    /// Like [`sibling_of`], but reports absence as
    /// [`RegisterError::NoSibling`].
    ///
    /// [`sibling_of`]: Self::sibling_of
    fn require_sibling(
        register: Self::Register,
        width: Width,
    ) -> Result<Self::Register, RegisterError> {
        Self::sibling_of(register, width).ok_or(RegisterError::NoSibling {
            register: register.name(),
            width,
        })
    }

    /// Checks if two registers share physical storage.
    ///
    /// Registers alias each other when they belong to the same family,
    /// except that the low and high byte of the same 16-bit register do not
    /// overlap.
    fn aliases(a: Self::Register, b: Self::Register) -> bool {
        let same_family = Self::family_of(a) == Self::family_of(b);

        if a == b {
            return true;
        }

        if a.width() == Width::Byte && b.width() == Width::Byte {
            return false;
        }

        same_family
    }

    /// Checks the structural invariants of the catalog.
    fn validate() -> Result<(), CatalogError> {
        let registers = Self::registers();
        let families = Self::families();

        for (index, register) in registers.iter().enumerate() {
            if registers[..index]
                .iter()
                .any(|other| other.name() == register.name())
            {
                return Err(CatalogError::DuplicateName(register.name()));
            }
        }

        for &register in registers {
            let occurrences = families
                .iter()
                .flat_map(|&family| Self::members(family))
                .filter(|&&member| member == register)
                .count();

            match occurrences {
                0 => return Err(CatalogError::Orphan(register.name())),
                1 => {}
                _ => return Err(CatalogError::MultipleFamilies(register.name())),
            }
        }

        for &family in families {
            let members = Self::members(family);

            if members.is_empty() {
                return Err(CatalogError::EmptyFamily(family.to_string()));
            }

            if let Some(member) = members.iter().find(|member| !registers.contains(member)) {
                return Err(CatalogError::Uncatalogued(member.name()));
            }

            if members
                .windows(2)
                .any(|pair| pair[0].width() > pair[1].width())
            {
                return Err(CatalogError::Unordered(family.to_string()));
            }

            for width in Width::ALL {
                let mut low = 0;
                let mut high = 0;

                for member in members.iter().filter(|member| member.width() == width) {
                    if member.is_high_byte() {
                        high += 1;
                    }
                    else {
                        low += 1;
                    }
                }

                let valid = match (low, high) {
                    (0, 0) | (1, 0) => true,
                    (1, 1) => width == Width::Byte,
                    _ => false,
                };

                if !valid {
                    return Err(CatalogError::WidthCollision {
                        family: family.to_string(),
                        width,
                    });
                }
            }

            tracing::debug!(
                %family,
                members = members.len(),
                widths = ?Self::widths(family),
                "family validated"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

use crate::Width;

/// An error that can occur when working with a register model.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// No register with the given name exists.
    #[error("Unknown register `{0}`")]
    UnknownRegister(String),

    /// The given character is not an operand-size suffix.
    #[error("Unknown width suffix `{0}`")]
    UnknownSuffix(char),

    /// The register does not belong to any family.
    #[error("Register `{0}` does not belong to any family")]
    NoFamily(&'static str),

    /// The register's family has no member of the requested width.
    #[error("Register `{register}` has no {width} sibling")]
    NoSibling {
        /// The register whose sibling was requested.
        register: &'static str,

        /// The requested width.
        width: Width,
    },
}

/// A structural defect in a register catalog.
///
/// These are reported by [`RegisterModel::validate`] and indicate a mistake
/// in the static register tables, never a runtime condition.
///
/// [`RegisterModel::validate`]: crate::RegisterModel::validate
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two registers share the same name.
    #[error("Duplicate register name `{0}`")]
    DuplicateName(&'static str),

    /// A catalog register belongs to no family.
    #[error("Register `{0}` does not belong to any family")]
    Orphan(&'static str),

    /// A register appears in more than one family, or more than once in a
    /// single family.
    #[error("Register `{0}` belongs to multiple families")]
    MultipleFamilies(&'static str),

    /// A family member is not part of the catalog.
    #[error("Register `{0}` is a family member but not in the catalog")]
    Uncatalogued(&'static str),

    /// A family has no members.
    #[error("Family `{0}` is empty")]
    EmptyFamily(String),

    /// A family has more than one member of the same width, other than a
    /// low/high byte pair.
    #[error("Family `{family}` has conflicting {width} members")]
    WidthCollision {
        /// The offending family.
        family: String,

        /// The width shared by the conflicting members.
        width: Width,
    },

    /// Family members are not listed in non-decreasing width order.
    #[error("Family `{0}` is not ordered by width")]
    Unordered(String),
}

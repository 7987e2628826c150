//! General-purpose register families and sibling resolution.
//!
//! A code generator often needs "the 32-bit view of the register holding
//! this value". This crate models register families (registers that name the
//! same physical storage at different widths) and resolves the member of a
//! family at a requested width.
//!
//! ```
//! use regmodel::{Width, arch::x86::Register};
//!
//! assert_eq!(Register::Ebx.sibling(Width::Word), Some(Register::Bx));
//! assert_eq!(Register::Bx.sibling(Width::Byte), Some(Register::Bl));
//! assert_eq!(Register::Ip.sibling(Width::Byte), None);
//! assert_eq!(Width::Long.suffix(), 'l');
//! ```

pub use regmodel_core::{
    CatalogError, Register, RegisterError, RegisterModel, Width, WidthSet, model, suffix,
};

/// Architecture-specific register catalogs.
pub mod arch {
    #[cfg(feature = "arch-x86")]
    pub use regmodel_arch_x86 as x86;
}

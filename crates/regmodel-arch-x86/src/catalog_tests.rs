use regmodel_core::{RegisterModel as _, Width, WidthSet};

use super::{Family, Register, X86, family_of, sibling_of};

#[test]
fn catalog_is_valid() {
    assert_eq!(X86::validate(), Ok(()));
}

#[test]
fn catalog_size() {
    assert_eq!(Register::ALL.len(), 35);
    assert_eq!(Family::ALL.len(), 9);

    for family in Family::ALL {
        let expected = if family.has_high_byte() { 5 } else { 3 };
        assert_eq!(family.members().len(), expected, "{family}");
    }
}

#[test]
fn every_register_is_in_its_family() {
    for register in Register::ALL {
        assert!(family_of(register).contains(&register), "{register}");
    }
}

#[test]
fn families_partition_the_catalog() {
    let mut members: Vec<Register> = Family::ALL
        .into_iter()
        .flat_map(|family| family.members().iter().copied())
        .collect();
    members.sort();

    let mut catalog = Register::ALL.to_vec();
    catalog.sort();

    assert_eq!(members, catalog);
}

#[test]
fn exactly_one_family_per_register() {
    for register in Register::ALL {
        let count = Family::ALL
            .into_iter()
            .filter(|family| family.members().contains(&register))
            .count();

        assert_eq!(count, 1, "{register}");
    }
}

#[test]
fn identity_sibling() {
    for register in Register::ALL {
        assert_eq!(
            sibling_of(register, register.width()),
            Some(register),
            "{register}"
        );
    }
}

#[test]
fn low_byte_is_preferred() {
    assert_eq!(sibling_of(Register::Bx, Width::Byte), Some(Register::Bl));
    assert_eq!(sibling_of(Register::Eax, Width::Byte), Some(Register::Al));
    assert_eq!(sibling_of(Register::Rcx, Width::Byte), Some(Register::Cl));
    assert_eq!(sibling_of(Register::Dx, Width::Byte), Some(Register::Dl));

    // A high byte is only its own 8-bit sibling.
    assert_eq!(sibling_of(Register::Ah, Width::Byte), Some(Register::Ah));
    assert_eq!(sibling_of(Register::Bh, Width::Word), Some(Register::Bx));
}

#[test]
fn no_byte_form_for_index_registers() {
    for register in [Register::Ip, Register::Eip, Register::Rip] {
        assert_eq!(sibling_of(register, Width::Byte), None, "{register}");
    }

    assert_eq!(sibling_of(Register::Rsp, Width::Byte), None);
    assert_eq!(sibling_of(Register::Di, Width::Byte), None);
    assert_eq!(sibling_of(Register::Esi, Width::Byte), None);
    assert_eq!(sibling_of(Register::Bp, Width::Byte), None);
}

#[test]
fn width_chain() {
    assert_eq!(sibling_of(Register::Al, Width::Quad), Some(Register::Rax));
    assert_eq!(sibling_of(Register::Rax, Width::Byte), Some(Register::Al));
    assert_eq!(sibling_of(Register::Ebx, Width::Word), Some(Register::Bx));
    assert_eq!(sibling_of(Register::Sp, Width::Long), Some(Register::Esp));
    assert_eq!(sibling_of(Register::Rip, Width::Word), Some(Register::Ip));
    assert_eq!(sibling_of(Register::Dh, Width::Quad), Some(Register::Rdx));
}

#[test]
fn siblings_stay_in_family() {
    for register in Register::ALL {
        for width in Width::ALL {
            if let Some(sibling) = sibling_of(register, width) {
                assert_eq!(sibling.width(), width);
                assert_eq!(sibling.family(), register.family());
            }
        }
    }
}

#[test]
fn names_are_unique() {
    for (index, register) in Register::ALL.iter().enumerate() {
        for other in &Register::ALL[index + 1..] {
            assert_ne!(register.name(), other.name());
        }
    }
}

#[test]
fn family_widths() {
    assert_eq!(Family::Ax.widths(), WidthSet::all());
    assert_eq!(
        Family::Ip.widths(),
        WidthSet::WORD | WidthSet::LONG | WidthSet::QUAD
    );

    for family in Family::ALL {
        assert_eq!(
            family.widths().contains_width(Width::Byte),
            family.has_high_byte(),
            "{family}"
        );
    }
}

#[test]
fn family_names_match_word_member() {
    for family in Family::ALL {
        let word = family
            .members()
            .iter()
            .find(|member| member.width() == Width::Word)
            .copied();

        assert_eq!(word.map(Register::name), Some(family.name()));
        assert_eq!(family.to_string(), family.name());
    }
}

#[test]
fn model_trait_matches_inherent_api() {
    for register in Register::ALL {
        assert_eq!(X86::family_of(register), register.family());
        assert_eq!(X86::try_family_of(register), Ok(register.family()));
        assert_eq!(X86::members(register.family()), family_of(register));
    }
}

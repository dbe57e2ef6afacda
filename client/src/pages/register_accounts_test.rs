use super::*;

fn filled() -> AccountForm {
    AccountForm {
        name: "Robert Mugisha".to_owned(),
        institution_name: "MAAIF".to_owned(),
        phone: "+256 700-123456".to_owned(),
        vehicle_type: "Truck".to_owned(),
        location: "Mbale".to_owned(),
        username: "rmugisha".to_owned(),
        email: "robert@example.com".to_owned(),
        password: "transport1".to_owned(),
    }
}

// =============================================================
// Payload building
// =============================================================

#[test]
fn admin_payload_uses_credentials_only() {
    let payload = build_account(AccountKind::Admin, &filled()).expect("payload");
    assert_eq!(
        payload,
        AccountPayload::Admin(AdminCreate {
            username: "rmugisha".to_owned(),
            email: "robert@example.com".to_owned(),
            password: "transport1".to_owned(),
        })
    );
}

#[test]
fn transport_payload_normalizes_phone() {
    let Ok(AccountPayload::Transport(data)) = build_account(AccountKind::Transport, &filled()) else {
        panic!("expected transport payload");
    };
    assert_eq!(data.phone, "+256700123456");
    assert_eq!(data.vehicle_type, "Truck");
}

#[test]
fn officer_requires_institution() {
    let form = AccountForm { institution_name: " ".to_owned(), ..filled() };
    assert_eq!(build_account(AccountKind::Officer, &form).unwrap_err().0, "Institution is required.");
}

#[test]
fn farmer_ignores_fields_it_does_not_show() {
    let form = AccountForm { institution_name: String::new(), vehicle_type: String::new(), ..filled() };
    assert!(matches!(build_account(AccountKind::Farmer, &form), Ok(AccountPayload::Farmer(_))));
}

#[test]
fn overlong_username_is_rejected() {
    let form = AccountForm { username: "u".repeat(MAX_USERNAME + 1), ..filled() };
    assert_eq!(
        build_account(AccountKind::Admin, &form).unwrap_err().0,
        "Username must be at most 50 characters."
    );
}

#[test]
fn errors_follow_field_order() {
    let form = AccountForm { name: String::new(), email: "bad".to_owned(), ..filled() };
    assert_eq!(build_account(AccountKind::Farmer, &form).unwrap_err().0, "Full Name is required.");
}

// =============================================================
// Field wiring
// =============================================================

#[test]
fn every_shown_field_round_trips_through_form() {
    for kind in [AccountKind::Admin, AccountKind::Officer, AccountKind::Transport, AccountKind::Farmer] {
        let mut form = AccountForm::default();
        for field in kind.fields() {
            form.set(*field, field.label().to_owned());
            assert_eq!(form.get(*field), field.label());
        }
    }
}

#[test]
fn every_kind_collects_credentials() {
    for kind in [AccountKind::Admin, AccountKind::Officer, AccountKind::Transport, AccountKind::Farmer] {
        let fields = kind.fields();
        assert!(fields.contains(&Field::Username));
        assert!(fields.contains(&Field::Email));
        assert!(fields.contains(&Field::Password));
    }
}

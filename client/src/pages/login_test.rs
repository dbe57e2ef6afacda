use super::*;

#[test]
fn build_login_trims_username_only() {
    let data = build_login("  admin ", " secret ").expect("login data");
    assert_eq!(data.username, "admin");
    assert_eq!(data.password, " secret ");
}

#[test]
fn build_login_requires_username() {
    assert_eq!(build_login("", "pw").unwrap_err().0, "Username is required.");
}

#[test]
fn build_login_requires_password() {
    assert_eq!(build_login("admin", "").unwrap_err().0, "Password is required.");
}

use super::*;

#[test]
fn validate_login_trims_username() {
    assert_eq!(
        validate_login("  asha  ", "secret"),
        Ok(LoginRequest {
            username: "asha".to_owned(),
            password: "secret".to_owned(),
        })
    );
}

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(
        validate_login("", "secret"),
        Err("Enter username and password.")
    );
    assert_eq!(validate_login("asha", ""), Err("Enter username and password."));
    assert_eq!(validate_login("   ", "secret"), Err("Enter username and password."));
}

#[test]
fn validate_login_keeps_password_verbatim() {
    // Passwords may legitimately carry leading/trailing whitespace.
    let request = validate_login("asha", " p4ss ").unwrap();
    assert_eq!(request.password, " p4ss ");
}

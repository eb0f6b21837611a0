use super::*;

#[test]
fn validate_register_accepts_complete_input() {
    let request =
        validate_register(" asha ", " asha@example.com ", "secret", "secret", " Asha Raman ")
            .unwrap();
    assert_eq!(request.username, "asha");
    assert_eq!(request.email, "asha@example.com");
    assert_eq!(request.password, "secret");
    assert_eq!(request.full_name.as_deref(), Some("Asha Raman"));
}

#[test]
fn validate_register_full_name_is_optional() {
    let request = validate_register("asha", "asha@example.com", "secret", "secret", "   ").unwrap();
    assert_eq!(request.full_name, None);
}

#[test]
fn validate_register_requires_core_fields() {
    for (username, email, password) in [
        ("", "asha@example.com", "secret"),
        ("asha", "", "secret"),
        ("asha", "asha@example.com", ""),
    ] {
        assert_eq!(
            validate_register(username, email, password, password, ""),
            Err("All fields except full name are required.")
        );
    }
}

#[test]
fn validate_register_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_register("asha", "asha@example.com", "secret", "secert", ""),
        Err("Passwords do not match")
    );
}

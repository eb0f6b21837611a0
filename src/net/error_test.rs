use super::*;

#[test]
fn structured_error_prefers_detail_field() {
    let err = structured_error(400, r#"{"detail":"Already subscribed","message":"other"}"#);
    assert_eq!(
        err,
        ApiError::Api {
            status: 400,
            message: "Already subscribed".to_owned()
        }
    );
}

#[test]
fn structured_error_falls_back_to_message_field() {
    let err = structured_error(403, r#"{"message":"Admins only"}"#);
    assert_eq!(
        err,
        ApiError::Api {
            status: 403,
            message: "Admins only".to_owned()
        }
    );
}

#[test]
fn structured_error_generic_on_unrecognized_body() {
    let err = structured_error(502, "<html>bad gateway</html>");
    assert_eq!(
        err,
        ApiError::Api {
            status: 502,
            message: "Request failed with status 502".to_owned()
        }
    );
}

#[test]
fn structured_error_generic_on_blank_message() {
    let err = structured_error(500, r#"{"detail":"  "}"#);
    assert_eq!(
        err,
        ApiError::Api {
            status: 500,
            message: "Request failed with status 500".to_owned()
        }
    );
}

#[test]
fn api_variant_displays_message_verbatim() {
    let err = ApiError::Api {
        status: 400,
        message: "Already subscribed".to_owned(),
    };
    assert_eq!(err.to_string(), "Already subscribed");
    assert!(err.is_structured());
}

#[test]
fn transport_variants_are_not_structured() {
    let http = ApiError::Http("connection refused".to_owned());
    assert_eq!(http.to_string(), "request failed: connection refused");
    assert!(!http.is_structured());

    let decode = ApiError::Decode("expected value".to_owned());
    assert_eq!(decode.to_string(), "invalid response body: expected value");
    assert!(!decode.is_structured());
}

use anyhow::Result;

use super::LoginStatus;
use super::Session;

#[test]
fn it_decodes_a_logged_in_status() -> Result<()> {
    let status: LoginStatus = serde_json::from_str(r#"{"loggedIn": true, "userID": 3}"#)?;
    let session = Session::from(status);

    assert!(session.logged_in);
    assert_eq!(session.user_id, Some(3));

    return Ok(());
}

#[test]
fn it_decodes_a_logged_out_status() -> Result<()> {
    let status: LoginStatus = serde_json::from_str(r#"{"loggedIn": false}"#)?;
    let session = Session::from(status);

    assert_eq!(session, Session::default());

    return Ok(());
}

#[test]
fn it_ignores_the_user_id_when_logged_out() {
    let session = Session::from(LoginStatus {
        logged_in: false,
        user_id: Some(3),
    });

    assert!(!session.logged_in);
    assert_eq!(session.user_id, None);
}

#[test]
fn it_clears() {
    let mut session = Session {
        logged_in: true,
        user_id: Some(3),
    };
    session.clear();

    assert_eq!(session, Session::default());
}

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::model::Member;
use crate::domain::service::MemberFields;

/// Create/update payload; the same shape serves both, as the operations
/// accept identical fields. `SecretString` keeps the password out of Debug
/// output and logs.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberReq {
    pub email: String,
    pub password: SecretString,
    pub age: i32,
}

impl From<MemberReq> for MemberFields {
    fn from(req: MemberReq) -> Self {
        Self {
            email: req.email,
            password: req.password.expose_secret().to_owned(),
            age: req.age,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MemberDto {
    pub id: Uuid,
    pub email: String,
    pub age: i32,
}

impl From<Member> for MemberDto {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            email: member.email,
            age: member.age,
        }
    }
}

/// Login payload for `POST /login/token`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenReq {
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_redacted_in_debug_output() {
        let req: MemberReq =
            serde_json::from_str(r#"{"email":"a@x.com","password":"hunter2","age":20}"#).unwrap();
        assert!(!format!("{req:?}").contains("hunter2"));
        assert_eq!(req.password.expose_secret(), "hunter2");
    }

    #[test]
    fn member_dto_never_carries_secrets() {
        let member = Member::new("a@x.com".to_owned(), "hunter2", 20, Vec::new());
        let json = serde_json::to_string(&MemberDto::from(member)).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("hunter2"));
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use ml_auth::{UserDetails, UserDetailsService};
use ml_security::roles;

use super::error::DomainError;
use super::model::Member;
use super::repo::MemberRepository;

/// Fields accepted when creating or updating a member.
#[derive(Debug, Clone)]
pub struct MemberFields {
    pub email: String,
    pub password: String,
    pub age: i32,
}

/// Member business logic.
///
/// Doubles as the identity directory for the auth layer: see the
/// [`UserDetailsService`] and [`MemberDirectory`] impls at the bottom.
pub struct MemberService<R: MemberRepository> {
    repo: Arc<R>,
}

impl<R: MemberRepository> MemberService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Self-registration; every new member gets `ROLE_MEMBER`.
    #[instrument(skip(self, fields), fields(member.email = %fields.email))]
    pub async fn create_member(&self, fields: MemberFields) -> Result<Member, DomainError> {
        self.create_member_with_roles(fields, vec![roles::ROLE_MEMBER.to_owned()])
            .await
    }

    /// Registration with explicit roles; used for config seeding.
    pub async fn create_member_with_roles(
        &self,
        fields: MemberFields,
        member_roles: Vec<String>,
    ) -> Result<Member, DomainError> {
        validate(&fields)?;

        let member = self
            .repo
            .insert(Member::new(
                fields.email,
                &fields.password,
                fields.age,
                member_roles,
            ))
            .await?;

        tracing::info!(member_id = %member.id, email = %member.email, "Member created");
        Ok(member)
    }

    #[instrument(skip(self), fields(member.id = %id))]
    pub async fn get_member(&self, id: Uuid) -> Result<Member, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::member_not_found(id))
    }

    pub async fn get_member_by_email(&self, email: &str) -> Result<Member, DomainError> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::member_not_found_by_email(email))
    }

    /// Full update of email, password, and age. Roles are not touched;
    /// role administration is not a self-service operation.
    #[instrument(skip(self, fields), fields(member.id = %id))]
    pub async fn update_member(&self, id: Uuid, fields: MemberFields) -> Result<Member, DomainError> {
        validate(&fields)?;

        let mut member = self.get_member(id).await?;
        member.email = fields.email;
        member.set_password(&fields.password);
        member.age = fields.age;

        self.repo.update(member).await
    }

    pub async fn update_member_by_email(
        &self,
        email: &str,
        fields: MemberFields,
    ) -> Result<Member, DomainError> {
        let member = self.get_member_by_email(email).await?;
        self.update_member(member.id, fields).await
    }

    #[instrument(skip(self), fields(member.id = %id))]
    pub async fn delete_member(&self, id: Uuid) -> Result<(), DomainError> {
        if self.repo.delete(id).await? {
            tracing::info!(member_id = %id, "Member deleted");
            Ok(())
        } else {
            Err(DomainError::member_not_found(id))
        }
    }

    pub async fn delete_member_by_email(&self, email: &str) -> Result<(), DomainError> {
        let member = self.get_member_by_email(email).await?;
        self.delete_member(member.id).await
    }
}

fn validate(fields: &MemberFields) -> Result<(), DomainError> {
    let email = fields.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(DomainError::invalid_email(&fields.email));
    }
    if fields.password.is_empty() {
        return Err(DomainError::validation("password", "must not be empty"));
    }
    if fields.age < 0 {
        return Err(DomainError::validation("age", "must not be negative"));
    }
    Ok(())
}

/// Identity lookup for the auth layer. Authorities are read from the live
/// record, so role changes take effect on the next authenticated request.
#[async_trait]
impl<R: MemberRepository> UserDetailsService for MemberService<R> {
    async fn find_by_email(&self, email: &str) -> Option<Box<dyn UserDetails>> {
        let member = self.repo.find_by_email(email).await.ok().flatten()?;
        Some(Box::new(member))
    }
}

/// Lookup capability consumed by other modules (favorites resolves the
/// owning member per request).
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    async fn member_id_by_email(&self, email: &str) -> Option<Uuid>;
}

#[async_trait]
impl<R: MemberRepository> MemberDirectory for MemberService<R> {
    async fn member_id_by_email(&self, email: &str) -> Option<Uuid> {
        self.repo
            .find_by_email(email)
            .await
            .ok()
            .flatten()
            .map(|member| member.id)
    }
}

//! Registration of member emails and linking them to Tray customers.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        customer::CustomerRepository, email_registration::EmailRegistrationRepository,
        plan::PlanRepository, store::DatabaseStore, user_link::UserLinkRepository,
    },
    error::{registration::RegistrationError, tray::TrayError},
    model::{
        customer::{CustomerWithPlan, LocalCustomer},
        registration::{AutoLinkSummary, EmailRegistration, RegisterEmailParam},
    },
    service::customer_lookup::CustomerLookupService,
    tray::client::TrayClient,
    util::parse::{is_valid_email, normalize_email},
};

/// A member's registration together with the customer it is linked to.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberRegistration {
    pub registration: EmailRegistration,
    pub customer: Option<CustomerWithPlan>,
}

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
    client: Option<&'a TrayClient>,
}

impl<'a> RegistrationService<'a> {
    /// Creates the service. Without a Tray client, customers are only looked up in
    /// local storage.
    pub fn new(db: &'a DatabaseConnection, client: Option<&'a TrayClient>) -> Self {
        Self { db, client }
    }

    /// Registers an email for a Discord user and links the user to its customer.
    ///
    /// The customer is looked up locally first and fetched from Tray when it is
    /// not stored yet and a client is available.
    ///
    /// # Arguments
    /// - `param`: Email, Discord user, user tag and guild
    ///
    /// # Returns
    /// - `Ok(CustomerWithPlan)`: The linked customer and its plan
    /// - `Err(RegistrationError::InvalidEmail)`: The email is malformed
    /// - `Err(RegistrationError::EmailAlreadyRegistered)`: Another user holds the email
    /// - `Err(RegistrationError::UserAlreadyRegistered)`: The user holds another email
    /// - `Err(RegistrationError::CustomerNotFound)`: No customer has the email
    /// - `Err(RegistrationError::Database | Tray)`: Storage or Tray failure
    pub async fn register(
        &self,
        param: RegisterEmailParam,
    ) -> Result<CustomerWithPlan, RegistrationError> {
        let email = normalize_email(&param.email);
        if !is_valid_email(&email) {
            return Err(RegistrationError::InvalidEmail(param.email));
        }

        let registration_repo = EmailRegistrationRepository::new(self.db);

        if let Some(existing) = registration_repo.find_by_email(&email).await? {
            if existing.discord_user_id != param.discord_user_id {
                return Err(RegistrationError::EmailAlreadyRegistered(email));
            }
        }
        if let Some(own) = registration_repo
            .find_by_user_id(param.discord_user_id)
            .await?
        {
            if own.email != email {
                return Err(RegistrationError::UserAlreadyRegistered(own.email));
            }
        }

        let customer = self.find_customer(&email).await?;

        registration_repo
            .register(RegisterEmailParam {
                email: email.clone(),
                ..param
            })
            .await?;
        UserLinkRepository::new(self.db)
            .link(param.discord_user_id, &customer.id)
            .await?;

        tracing::info!(
            "Registered {} for user {} and linked customer {}",
            email,
            param.discord_user_id,
            customer.id
        );

        Ok(self.with_plan(customer).await?)
    }

    /// Removes a user's email registration and customer link.
    ///
    /// # Returns
    /// - `Ok(String)`: The email that was removed
    /// - `Err(RegistrationError::NotRegistered)`: The user had nothing registered
    pub async fn unregister(&self, discord_user_id: u64) -> Result<String, RegistrationError> {
        let registration_repo = EmailRegistrationRepository::new(self.db);

        let registration = registration_repo
            .find_by_user_id(discord_user_id)
            .await?
            .ok_or(RegistrationError::NotRegistered)?;

        registration_repo.delete_by_user_id(discord_user_id).await?;
        UserLinkRepository::new(self.db)
            .unlink(discord_user_id)
            .await?;

        tracing::info!(
            "Removed registration {} of user {}",
            registration.email,
            discord_user_id
        );

        Ok(registration.email)
    }

    /// Gets a user's registration and the customer it links to.
    ///
    /// # Returns
    /// - `Ok(MemberRegistration)`: Registration, with the customer when linked
    /// - `Err(RegistrationError::NotRegistered)`: The user has nothing registered
    pub async fn member_registration(
        &self,
        discord_user_id: u64,
    ) -> Result<MemberRegistration, RegistrationError> {
        let registration = EmailRegistrationRepository::new(self.db)
            .find_by_user_id(discord_user_id)
            .await?
            .ok_or(RegistrationError::NotRegistered)?;

        let customer = match UserLinkRepository::new(self.db)
            .find_by_user_id(discord_user_id)
            .await?
        {
            Some(link) => CustomerRepository::new(self.db)
                .find_by_id(&link.customer_id)
                .await?,
            None => None,
        };
        let customer = match customer {
            Some(customer) => Some(self.with_plan(customer).await?),
            None => None,
        };

        Ok(MemberRegistration {
            registration,
            customer,
        })
    }

    /// Links every registered email to the stored customer with the same email.
    ///
    /// Only local customers are considered; run an import first to pick up new
    /// Tray customers.
    pub async fn auto_link(&self) -> Result<AutoLinkSummary, RegistrationError> {
        let registrations = EmailRegistrationRepository::new(self.db).get_all().await?;
        let customer_repo = CustomerRepository::new(self.db);
        let link_repo = UserLinkRepository::new(self.db);

        let mut summary = AutoLinkSummary {
            total_emails: registrations.len(),
            ..Default::default()
        };

        for registration in registrations {
            let customer = match customer_repo.find_by_email(&registration.email).await {
                Ok(Some(customer)) => customer,
                Ok(None) => {
                    tracing::debug!("No customer for registered email {}", registration.email);
                    summary.failed += 1;
                    continue;
                }
                Err(e) => {
                    tracing::warn!("Failed to look up {}: {}", registration.email, e);
                    summary.failed += 1;
                    continue;
                }
            };

            match link_repo
                .link(registration.discord_user_id, &customer.id)
                .await
            {
                Ok(_) => summary.linked += 1,
                Err(e) => {
                    tracing::warn!(
                        "Failed to link user {} to customer {}: {}",
                        registration.discord_user_id,
                        customer.id,
                        e
                    );
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            "Auto link finished: {} of {} emails linked, {} failed",
            summary.linked,
            summary.total_emails,
            summary.failed
        );

        Ok(summary)
    }

    async fn find_customer(&self, email: &str) -> Result<LocalCustomer, RegistrationError> {
        if let Some(customer) = CustomerRepository::new(self.db).find_by_email(email).await? {
            return Ok(customer);
        }

        let Some(client) = self.client else {
            return Err(RegistrationError::CustomerNotFound(email.to_string()));
        };

        let store = DatabaseStore::new(self.db.clone());
        match CustomerLookupService::new(client, &store)
            .fetch_by_email(email)
            .await
        {
            Ok(customer) => Ok(customer),
            Err(TrayError::CustomerNotFound(_)) => {
                Err(RegistrationError::CustomerNotFound(email.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn with_plan(
        &self,
        customer: LocalCustomer,
    ) -> Result<CustomerWithPlan, sea_orm::DbErr> {
        let plan = match customer.plan_id.as_deref() {
            Some(plan_id) => PlanRepository::new(self.db).find_by_id(plan_id).await?,
            None => None,
        };

        Ok(CustomerWithPlan { customer, plan })
    }
}

use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                if constraint == CNT_USER_EMAIL {
                    return DomainError::AlreadyExists("email already registered".into());
                }
                return DomainError::StoreUnavailable(format!(
                    "database constraint violation: {constraint}"
                ));
            }

            if let Some(code) = db_err.code() {
                if code.as_ref() == "23505" {
                    return DomainError::AlreadyExists("unique constraint violated".into());
                }
            }

            DomainError::StoreUnavailable(db_err.message().to_string())
        }
        _ => DomainError::StoreUnavailable(err.to_string()),
    }
}

use crate::domain::models::auth::CurrentUser;
use crate::domain::models::user::Role;
use crate::error::AppError;

/// Order rows are visible and mutable through member endpoints only to the
/// owning user; admins see everything.
pub fn can_access_order(role: Role, requester_id: i64, owner_id: i64) -> bool {
    role.is_admin() || requester_id == owner_id
}

pub fn require_admin(user: &CurrentUser) -> Result<(), AppError> {
    if user.role.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden("Administrator access required".into()))
    }
}

pub fn require_order_access(user: &CurrentUser, owner_id: i64) -> Result<(), AppError> {
    if can_access_order(user.role, user.id, owner_id) {
        Ok(())
    } else {
        Err(AppError::Forbidden("You do not have access to this order".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, role: Role) -> CurrentUser {
        CurrentUser {
            id,
            email: format!("u{}@test.local", id),
            full_name: "Test".to_string(),
            role,
            address: None,
        }
    }

    #[test]
    fn owner_can_access_own_order() {
        assert!(can_access_order(Role::Customer, 7, 7));
    }

    #[test]
    fn admin_can_access_any_order() {
        assert!(can_access_order(Role::Admin, 1, 99));
    }

    #[test]
    fn other_customer_is_denied() {
        assert!(!can_access_order(Role::Customer, 7, 8));
        assert!(require_order_access(&user(7, Role::Customer), 8).is_err());
    }

    #[test]
    fn require_admin_gates_customers() {
        assert!(require_admin(&user(1, Role::Admin)).is_ok());
        assert!(require_admin(&user(2, Role::Customer)).is_err());
    }
}

//! Two-phase administrator transfer.
//!
//! The current admin stages a successor with `UpdateAdmin`; the successor
//! becomes admin only by calling `ClaimAdmin` itself. Staging never touches
//! the live admin and a later stage overwrites an earlier one.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Deps, DepsMut, Event, MessageInfo, Response, StdResult, Storage};
use cw_storage_plus::Item;

use crate::error::AdminErrors;

/// Current contract admin.
pub const ADMIN: Item<Addr> = Item::new("contractadmin");

/// Admin that can be claimed by the staged address.
pub const STAGED_ADMIN: Item<Addr> = Item::new("stagingcontractadmin");

#[cw_serde]
pub struct AdminResponse {
    pub admin: Addr,
    pub staged_admin: Option<Addr>,
}

/// Store the initial admin. Called once from `instantiate`.
pub fn init_admin(storage: &mut dyn Storage, admin: &Addr) -> StdResult<()> {
    ADMIN.save(storage, admin)
}

/// Fail with `AdminValidationFailed` unless `caller` is the current admin.
///
/// Returns the admin so callers that pay the admin do not load it twice.
pub fn assert_admin<E: AdminErrors>(storage: &dyn Storage, caller: &Addr) -> Result<Addr, E> {
    let admin = ADMIN.load(storage)?;
    if *caller != admin {
        return Err(E::admin_validation_failed());
    }
    Ok(admin)
}

/// `UpdateAdmin(admin)`: stage a successor.
pub fn execute_update_admin<E: AdminErrors>(
    deps: DepsMut,
    info: &MessageInfo,
    admin: String,
) -> Result<Response, E> {
    assert_admin::<E>(deps.storage, &info.sender)?;

    let staged = deps.api.addr_validate(&admin)?;
    STAGED_ADMIN.save(deps.storage, &staged)?;

    Ok(Response::new()
        .add_attribute("action", "update_admin")
        .add_attribute("staged_admin", staged))
}

/// `ClaimAdmin()`: the staged address takes over as admin.
pub fn execute_claim_admin<E: AdminErrors>(
    deps: DepsMut,
    info: &MessageInfo,
) -> Result<Response, E> {
    let staged = STAGED_ADMIN
        .may_load(deps.storage)?
        .ok_or_else(E::staging_admin_not_exist)?;

    if info.sender != staged {
        return Err(E::staging_admin_validation_failed());
    }

    ADMIN.save(deps.storage, &staged)?;
    STAGED_ADMIN.remove(deps.storage);

    Ok(Response::new()
        .add_event(Event::new("ClaimAdmin").add_attribute("new_admin", &staged))
        .add_attribute("action", "claim_admin")
        .add_attribute("new_admin", staged))
}

pub fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    Ok(AdminResponse {
        admin: ADMIN.load(deps.storage)?,
        staged_admin: STAGED_ADMIN.may_load(deps.storage)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_info};
    use cosmwasm_std::StdError;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Std(StdError),
        AdminValidationFailed,
        StagingAdminNotExist,
        StagingAdminValidationFailed,
    }

    impl From<StdError> for TestError {
        fn from(err: StdError) -> Self {
            TestError::Std(err)
        }
    }

    impl AdminErrors for TestError {
        fn admin_validation_failed() -> Self {
            TestError::AdminValidationFailed
        }
        fn staging_admin_not_exist() -> Self {
            TestError::StagingAdminNotExist
        }
        fn staging_admin_validation_failed() -> Self {
            TestError::StagingAdminValidationFailed
        }
    }

    #[test]
    fn test_assert_admin() {
        let mut deps = mock_dependencies();
        init_admin(deps.as_mut().storage, &Addr::unchecked("admin")).unwrap();

        let admin = assert_admin::<TestError>(&deps.storage, &Addr::unchecked("admin")).unwrap();
        assert_eq!(admin, Addr::unchecked("admin"));

        let err = assert_admin::<TestError>(&deps.storage, &Addr::unchecked("other")).unwrap_err();
        assert_eq!(err, TestError::AdminValidationFailed);
    }

    #[test]
    fn test_stage_then_claim() {
        let mut deps = mock_dependencies();
        init_admin(deps.as_mut().storage, &Addr::unchecked("admin")).unwrap();

        execute_update_admin::<TestError>(deps.as_mut(), &mock_info("admin", &[]), "next".into())
            .unwrap();

        // Staging leaves the live admin in place
        let state = query_admin(deps.as_ref()).unwrap();
        assert_eq!(state.admin, Addr::unchecked("admin"));
        assert_eq!(state.staged_admin, Some(Addr::unchecked("next")));

        let res = execute_claim_admin::<TestError>(deps.as_mut(), &mock_info("next", &[])).unwrap();
        assert_eq!(res.events.len(), 1);
        assert_eq!(res.events[0].ty, "ClaimAdmin");
        assert_eq!(res.events[0].attributes[0].value, "next");

        let state = query_admin(deps.as_ref()).unwrap();
        assert_eq!(state.admin, Addr::unchecked("next"));
        assert_eq!(state.staged_admin, None);
    }

    #[test]
    fn test_restage_overwrites() {
        let mut deps = mock_dependencies();
        init_admin(deps.as_mut().storage, &Addr::unchecked("admin")).unwrap();
        let info = mock_info("admin", &[]);

        execute_update_admin::<TestError>(deps.as_mut(), &info, "first".into()).unwrap();
        execute_update_admin::<TestError>(deps.as_mut(), &info, "second".into()).unwrap();

        let err = execute_claim_admin::<TestError>(deps.as_mut(), &mock_info("first", &[]))
            .unwrap_err();
        assert_eq!(err, TestError::StagingAdminValidationFailed);

        execute_claim_admin::<TestError>(deps.as_mut(), &mock_info("second", &[])).unwrap();
        assert_eq!(ADMIN.load(&deps.storage).unwrap(), Addr::unchecked("second"));
    }

    #[test]
    fn test_stage_current_admin() {
        let mut deps = mock_dependencies();
        init_admin(deps.as_mut().storage, &Addr::unchecked("admin")).unwrap();
        let info = mock_info("admin", &[]);

        execute_update_admin::<TestError>(deps.as_mut(), &info, "admin".into()).unwrap();
        execute_claim_admin::<TestError>(deps.as_mut(), &info).unwrap();

        let state = query_admin(deps.as_ref()).unwrap();
        assert_eq!(state.admin, Addr::unchecked("admin"));
        assert_eq!(state.staged_admin, None);
    }

    #[test]
    fn test_claim_without_stage() {
        let mut deps = mock_dependencies();
        init_admin(deps.as_mut().storage, &Addr::unchecked("admin")).unwrap();

        let err = execute_claim_admin::<TestError>(deps.as_mut(), &mock_info("admin", &[]))
            .unwrap_err();
        assert_eq!(err, TestError::StagingAdminNotExist);
    }

    #[test]
    fn test_update_admin_requires_admin() {
        let mut deps = mock_dependencies();
        init_admin(deps.as_mut().storage, &Addr::unchecked("admin")).unwrap();

        let err = execute_update_admin::<TestError>(
            deps.as_mut(),
            &mock_info("intruder", &[]),
            "intruder".into(),
        )
        .unwrap_err();
        assert_eq!(err, TestError::AdminValidationFailed);
        assert_eq!(STAGED_ADMIN.may_load(&deps.storage).unwrap(), None);
    }
}

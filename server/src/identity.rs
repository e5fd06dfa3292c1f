use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use error_stack::{Report, ResultExt};
use kernel::prelude::entity::{Actor, GuestId, Role};
use kernel::KernelError;
use uuid::Uuid;

use crate::error::ErrorStatus;

pub const ROLE_HEADER: &str = "X-Hotel-Role";
pub const GUEST_ID_HEADER: &str = "X-Hotel-Guest-Id";

/// The authenticated caller, as forwarded by the gateway in front of this service.
#[derive(Debug, Clone)]
pub struct Caller(pub Actor);

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ErrorStatus;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve(&parts.headers)
            .map(Caller)
            .map_err(ErrorStatus::from)
    }
}

fn header<'a>(
    headers: &'a HeaderMap,
    name: &str,
) -> error_stack::Result<Option<&'a str>, KernelError> {
    headers
        .get(name)
        .map(|value| value.to_str())
        .transpose()
        .change_context(KernelError::Unauthorized)
        .attach_printable_lazy(|| format!("{name} is not valid ascii"))
}

pub(crate) fn resolve(headers: &HeaderMap) -> error_stack::Result<Actor, KernelError> {
    let role = header(headers, ROLE_HEADER)?
        .ok_or_else(|| {
            Report::new(KernelError::Unauthorized).attach_printable(format!("missing {ROLE_HEADER}"))
        })?
        .parse::<Role>()?;
    let guest_id = header(headers, GUEST_ID_HEADER)?
        .map(|value| {
            Uuid::parse_str(value.trim())
                .change_context(KernelError::Unauthorized)
                .attach_printable_lazy(|| format!("malformed {GUEST_ID_HEADER}: {value}"))
        })
        .transpose()?
        .map(GuestId::new);
    Ok(Actor::new(role, guest_id))
}

#[cfg(test)]
mod test {
    use axum::http::{HeaderMap, HeaderValue};
    use kernel::prelude::entity::{GuestId, Role};
    use kernel::KernelError;
    use uuid::Uuid;

    use super::{resolve, GUEST_ID_HEADER, ROLE_HEADER};

    #[test]
    fn missing_role_is_unauthorized() {
        let err = resolve(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.current_context(), &KernelError::Unauthorized);

        let mut headers = HeaderMap::new();
        headers.insert(ROLE_HEADER, HeaderValue::from_static("janitor"));
        let err = resolve(&headers).unwrap_err();
        assert_eq!(err.current_context(), &KernelError::Unauthorized);
    }

    #[test]
    fn guest_id_is_optional_but_must_be_a_uuid() {
        let mut headers = HeaderMap::new();
        headers.insert(ROLE_HEADER, HeaderValue::from_static("Staff"));
        let actor = resolve(&headers).unwrap();
        assert_eq!(actor.role(), &Role::Staff);
        assert!(actor.guest_id().is_none());

        let id = Uuid::new_v4();
        headers.insert(ROLE_HEADER, HeaderValue::from_static("guest"));
        headers.insert(GUEST_ID_HEADER, HeaderValue::from_str(&id.to_string()).unwrap());
        let actor = resolve(&headers).unwrap();
        assert_eq!(actor.role(), &Role::Guest);
        assert_eq!(actor.guest_id(), Some(&GuestId::new(id)));

        headers.insert(GUEST_ID_HEADER, HeaderValue::from_static("42"));
        let err = resolve(&headers).unwrap_err();
        assert_eq!(err.current_context(), &KernelError::Unauthorized);
    }
}

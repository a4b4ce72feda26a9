use crate::AppState;
use backend_domain::SessionIdentity;

pub async fn get_identity(state: &AppState) -> SessionIdentity {
    state.session.get_identity().await
}

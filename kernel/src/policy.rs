use crate::entity::TurnoverPolicy;

pub trait DependOnTurnoverPolicy: 'static + Sync + Send {
    fn turnover_policy(&self) -> TurnoverPolicy;
}

use application::service::ReportService;
use axum::extract::State;
use axum::routing::get;
use axum::Router;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::QueryParams;
use crate::handler::AppModule;
use crate::identity::Caller;
use crate::request::{
    DemographicsRequest, OccupancyRequest, OverviewRequest, ReportTransformer, RevenueRequest,
};
use crate::response::ReportPresenter;

pub trait ReportRouter {
    fn route_report(self) -> Self;
}

impl ReportRouter for Router<AppModule> {
    fn route_report(self) -> Self {
        self.route(
            "/reports/revenue",
            get(
                |State(module): State<AppModule>,
                 Caller(actor): Caller,
                 QueryParams(req): QueryParams<RevenueRequest>| async move {
                    Controller::new(ReportTransformer, ReportPresenter)
                        .try_intake((actor, req))?
                        .handle(|dto| async move { module.revenue(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/reports/occupancy",
            get(
                |State(module): State<AppModule>,
                 Caller(actor): Caller,
                 QueryParams(req): QueryParams<OccupancyRequest>| async move {
                    Controller::new(ReportTransformer, ReportPresenter)
                        .try_intake((actor, req))?
                        .handle(|dto| async move { module.occupancy(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/reports/demographics",
            get(
                |State(module): State<AppModule>, Caller(actor): Caller| async move {
                    Controller::new(ReportTransformer, ReportPresenter)
                        .intake(DemographicsRequest::new(actor))
                        .handle(|dto| async move { module.demographics(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/reports/overview",
            get(
                |State(module): State<AppModule>, Caller(actor): Caller| async move {
                    Controller::new(ReportTransformer, ReportPresenter)
                        .intake(OverviewRequest::new(actor))
                        .handle(|dto| async move { module.overview(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}

use application::service::{GetGuestService, HandleGuestService};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use uuid::Uuid;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::{JsonBody, PathParam};
use crate::handler::AppModule;
use crate::identity::Caller;
use crate::request::{
    CreateGuestRequest, DeleteGuestRequest, GetGuestRequest, GuestTransformer, UpdateGuestRequest,
};
use crate::response::GuestPresenter;

pub trait GuestRouter {
    fn route_guest(self) -> Self;
}

impl GuestRouter for Router<AppModule> {
    fn route_guest(self) -> Self {
        self.route(
            "/guests",
            get(
                |State(module): State<AppModule>, Caller(actor): Caller| async move {
                    Controller::new(GuestTransformer, GuestPresenter)
                        .intake(actor)
                        .handle(|dto| async move { module.get_all_guests(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 Caller(actor): Caller,
                 JsonBody(req): JsonBody<CreateGuestRequest>| async move {
                    Controller::new(GuestTransformer, GuestPresenter)
                        .try_intake((actor, req))?
                        .handle(|dto| async move { module.create_guest(dto).await })
                        .await
                        .map(|res| (StatusCode::CREATED, res))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/guests/:id",
            get(
                |State(module): State<AppModule>, Caller(actor): Caller, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(GuestTransformer, GuestPresenter)
                        .intake(GetGuestRequest::new(actor, id))
                        .handle(|dto| async move { module.get_guest(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .patch(
                |State(module): State<AppModule>,
                 Caller(actor): Caller,
                 PathParam(id): PathParam<Uuid>,
                 JsonBody(req): JsonBody<UpdateGuestRequest>| async move {
                    Controller::new(GuestTransformer, GuestPresenter)
                        .try_intake((actor, id, req))?
                        .handle(|dto| async move { module.update_guest(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Caller(actor): Caller, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(GuestTransformer, GuestPresenter)
                        .intake(DeleteGuestRequest::new(actor, id))
                        .handle(|dto| async move { module.delete_guest(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}

use application::service::{GetRoomService, HandleRoomService};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use uuid::Uuid;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::handler::AppModule;
use crate::identity::Caller;
use crate::request::{
    CreateRoomRequest, DeleteRoomRequest, GetRoomRequest, RoomTransformer, SearchRoomRequest,
    UpdateRoomRequest,
};
use crate::response::RoomPresenter;

pub trait RoomRouter {
    fn route_room(self) -> Self;
}

impl RoomRouter for Router<AppModule> {
    fn route_room(self) -> Self {
        self.route(
            "/rooms",
            get(
                |State(module): State<AppModule>, Caller(actor): Caller| async move {
                    Controller::new(RoomTransformer, RoomPresenter)
                        .intake(actor)
                        .handle(|dto| async move { module.get_all_rooms(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 Caller(actor): Caller,
                 JsonBody(req): JsonBody<CreateRoomRequest>| async move {
                    Controller::new(RoomTransformer, RoomPresenter)
                        .intake((actor, req))
                        .handle(|dto| async move { module.create_room(dto).await })
                        .await
                        .map(|res| (StatusCode::CREATED, res))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/rooms/available",
            get(
                |State(module): State<AppModule>,
                 Caller(actor): Caller,
                 QueryParams(req): QueryParams<SearchRoomRequest>| async move {
                    Controller::new(RoomTransformer, RoomPresenter)
                        .try_intake((actor, req))?
                        .handle(|dto| async move { module.search_available(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/rooms/:id",
            get(
                |State(module): State<AppModule>, Caller(actor): Caller, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(RoomTransformer, RoomPresenter)
                        .intake(GetRoomRequest::new(actor, id))
                        .handle(|dto| async move { module.get_room(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .patch(
                |State(module): State<AppModule>,
                 Caller(actor): Caller,
                 PathParam(id): PathParam<Uuid>,
                 JsonBody(req): JsonBody<UpdateRoomRequest>| async move {
                    Controller::new(RoomTransformer, RoomPresenter)
                        .intake((actor, id, req))
                        .handle(|dto| async move { module.update_room(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Caller(actor): Caller, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(RoomTransformer, RoomPresenter)
                        .intake(DeleteRoomRequest::new(actor, id))
                        .handle(|dto| async move { module.delete_room(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}

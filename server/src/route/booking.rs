use application::service::{BookingLifecycleService, GetBookingService};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use uuid::Uuid;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::{JsonBody, PathParam};
use crate::handler::AppModule;
use crate::identity::Caller;
use crate::request::{
    BookingTransformer, CheckInRequest, CheckOutRequest, CreateBookingRequest,
    DeleteBookingRequest, GetBookingRequest,
};
use crate::response::{BookingPresenter, FrontDeskPresenter};

pub trait BookingRouter {
    fn route_booking(self) -> Self;
}

impl BookingRouter for Router<AppModule> {
    fn route_booking(self) -> Self {
        self.route(
            "/bookings",
            get(
                |State(module): State<AppModule>, Caller(actor): Caller| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(actor)
                        .handle(|dto| async move { module.get_all_bookings(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 Caller(actor): Caller,
                 JsonBody(req): JsonBody<CreateBookingRequest>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .try_intake((actor, req))?
                        .handle(|dto| async move { module.create_booking(dto).await })
                        .await
                        .map(|res| (StatusCode::CREATED, res))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/bookings/:id",
            get(
                |State(module): State<AppModule>, Caller(actor): Caller, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(GetBookingRequest::new(actor, id))
                        .handle(|dto| async move { module.get_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Caller(actor): Caller, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(DeleteBookingRequest::new(actor, id))
                        .handle(|dto| async move { module.delete_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/bookings/:id/check-in",
            post(
                |State(module): State<AppModule>, Caller(actor): Caller, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(BookingTransformer, FrontDeskPresenter)
                        .intake(CheckInRequest::new(actor, id))
                        .handle(|dto| async move { module.check_in(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/bookings/:id/check-out",
            post(
                |State(module): State<AppModule>, Caller(actor): Caller, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(BookingTransformer, FrontDeskPresenter)
                        .intake(CheckOutRequest::new(actor, id))
                        .handle(|dto| async move { module.check_out(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}

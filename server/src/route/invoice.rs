use application::service::{GetInvoiceService, PaymentService, SettleInvoiceService};
use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;
use uuid::Uuid;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::PathParam;
use crate::handler::AppModule;
use crate::identity::Caller;
use crate::request::{
    GetInvoiceRequest, InvoiceTransformer, PaymentIntentRequest, SettleInvoiceRequest,
};
use crate::response::InvoicePresenter;

pub trait InvoiceRouter {
    fn route_invoice(self) -> Self;
}

impl InvoiceRouter for Router<AppModule> {
    fn route_invoice(self) -> Self {
        self.route(
            "/invoices",
            get(
                |State(module): State<AppModule>, Caller(actor): Caller| async move {
                    Controller::new(InvoiceTransformer, InvoicePresenter)
                        .intake(actor)
                        .handle(|dto| async move { module.get_all_invoices(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/invoices/:id",
            get(
                |State(module): State<AppModule>, Caller(actor): Caller, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(InvoiceTransformer, InvoicePresenter)
                        .intake(GetInvoiceRequest::new(actor, id))
                        .handle(|dto| async move { module.get_invoice(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/invoices/:id/settle",
            post(
                |State(module): State<AppModule>, Caller(actor): Caller, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(InvoiceTransformer, InvoicePresenter)
                        .intake(SettleInvoiceRequest::new(actor, id))
                        .handle(|dto| async move { module.settle_invoice(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/invoices/:id/payment-intent",
            post(
                |State(module): State<AppModule>, Caller(actor): Caller, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(InvoiceTransformer, InvoicePresenter)
                        .intake(PaymentIntentRequest::new(actor, id))
                        .handle(|dto| async move { module.request_payment(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}

//! Route handlers.
//!
//! Thin relays: parse the wire form, call the registry, render the response
//! envelope. Registry failures convert to [`ApiError`] by failure kind; the
//! read-only lookups never fail and always answer 200 with a registration
//! flag the caller can check.

use crate::error::ApiError;
use crate::extract::CallerIdentity;
use crate::router::AppState;
use crate::types::{
    AddSellerRequest, HealthResponse, ManufacturerInfo, ManufacturerInfoResponse,
    RegisterManufacturerRequest, RegisterProductRequest, RegisterProductResponse, SellerInfo,
    SellerInfoResponse, StatusResponse, TransferProductRequest, VerifyProductRequest,
    VerifyProductResponse,
};
use axum::extract::{Path, State};
use axum::Json;
use veritas_registry::prelude::{Identity, TokenAmount};

/// `POST /registerManufacturer`
pub async fn register_manufacturer(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(req): Json<RegisterManufacturerRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    state
        .registry
        .register_manufacturer(caller, &req.manufacturer_id, &req.name)
        .await?;
    Ok(Json(StatusResponse::ok(
        "Manufacturer registered successfully",
    )))
}

/// `POST /registerProduct`
pub async fn register_product(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(req): Json<RegisterProductRequest>,
) -> Result<Json<RegisterProductResponse>, ApiError> {
    let price: TokenAmount = req
        .price
        .parse()
        .map_err(|err| ApiError::unprocessable(format!("invalid price: {err}")))?;

    state
        .registry
        .register_product(
            caller,
            &req.manufacturer_id,
            &req.product_name,
            &req.serial_number,
            price,
            &req.brand,
        )
        .await?;

    Ok(Json(RegisterProductResponse {
        success: true,
        product_id: req.serial_number,
        message: "Product registered successfully".to_string(),
    }))
}

/// `POST /addSeller`
pub async fn add_seller(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(req): Json<AddSellerRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    state
        .registry
        .add_seller(caller, &req.seller_code, &req.name, &req.brand)
        .await?;
    Ok(Json(StatusResponse::ok("Seller added successfully")))
}

/// `POST /transferProduct`
pub async fn transfer_product(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(req): Json<TransferProductRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    state
        .registry
        .transfer_product(caller, &req.serial_number, req.new_owner)
        .await?;
    Ok(Json(StatusResponse::ok("Product transferred successfully")))
}

/// `POST /verifyProduct` - open to anyone, answers 200 for unknown serials.
pub async fn verify_product(
    State(state): State<AppState>,
    Json(req): Json<VerifyProductRequest>,
) -> Json<VerifyProductResponse> {
    let product = state.registry.verify_product(&req.product_id).await;
    Json(VerifyProductResponse::from(product))
}

/// `GET /getSellerInfo/:address`
pub async fn get_seller_info(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<SellerInfoResponse>, ApiError> {
    let identity: Identity = address
        .parse()
        .map_err(|err| ApiError::bad_request(format!("invalid address: {err}")))?;
    let seller = state.registry.get_seller_info(identity).await;
    Ok(Json(SellerInfoResponse {
        success: true,
        seller_info: SellerInfo::from(seller),
    }))
}

/// `GET /getManufacturerInfo/:manufacturerId`
pub async fn get_manufacturer_info(
    State(state): State<AppState>,
    Path(manufacturer_id): Path<String>,
) -> Json<ManufacturerInfoResponse> {
    let manufacturer = state.registry.get_manufacturer_info(&manufacturer_id).await;
    Json(ManufacturerInfoResponse {
        success: true,
        manufacturer_info: ManufacturerInfo::from(manufacturer),
    })
}

/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: veritas_registry::VERSION,
    })
}

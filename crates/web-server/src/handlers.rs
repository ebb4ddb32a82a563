use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    response::Html,
};
use database::distinct_catagories;
use std::sync::Arc;
use tera::Context;

/// # GET /vendors
/// Lists every vendor in the store, in whatever order it returns them.
pub async fn list_vendors(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let vendors = state.db_repo.all_vendors().await?;

    let mut context = Context::new();
    context.insert("vendors", &vendors);
    let body = state.templates.render("vendor_list.html", &context)?;
    Ok(Html(body))
}

/// # GET /vendors/:vendor_id/menu
/// Shows one vendor's header info, full menu and category labels.
///
/// A vendor id that matches no row is a 404; the path extractor already
/// rejected non-integer segments before this body runs.
pub async fn vendor_menu(
    Path(vendor_id): Path<u32>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let selected_vendor = state
        .db_repo
        .vendor_by_id(i64::from(vendor_id))
        .await?
        .ok_or(AppError::VendorNotFound(vendor_id))?;

    let menu_items = state
        .db_repo
        .menu_items_for_vendor(i64::from(vendor_id))
        .await?;
    let catagories = distinct_catagories(&menu_items);

    let mut context = Context::new();
    context.insert("selected_vendor", &selected_vendor);
    context.insert("menuItems", &menu_items);
    context.insert("catagories", &catagories);
    let body = state.templates.render("menu.html", &context)?;
    Ok(Html(body))
}

/// # GET /
/// Placeholder landing behavior: serves the vendor list until a dedicated
/// landing page exists.
pub async fn home(state: State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    list_vendors(state).await
}

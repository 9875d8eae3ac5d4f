use salvo::csrf::{CsrfDepotExt, FormFinder, hmac_cookie_csrf};
use salvo::prelude::*;
use salvo::writing::Text;

use crate::entity::review;
use crate::state::AppState;
use crate::store;
use crate::validate::{validate_review, FieldError};

type Result<T> = std::result::Result<T, StatusError>;

/// Full router as served in production: all handlers behind CSRF protection
/// for form submissions, signed with the configured secret.
pub fn router(state: AppState, secret_key: [u8; 32]) -> Router {
    let csrf = hmac_cookie_csrf(secret_key, FormFinder::new("csrf_token"));
    Router::new().hoop(csrf).push(routes(state))
}

/// Handler routes without the CSRF layer, so tests can drive the endpoints
/// directly against an isolated database.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .hoop(affix_state::inject(state))
        .get(home)
        .push(
            Router::with_path("survey")
                .get(survey_form)
                .post(submit_survey)
                .push(Router::with_path("results").get(survey_results)),
        )
        .push(
            Router::with_path("reviews")
                .get(reviews_page)
                .post(submit_review),
        )
}

fn state(depot: &Depot) -> Result<&AppState> {
    depot
        .obtain::<AppState>()
        .map_err(|_| StatusError::internal_server_error())
}

fn render_page(state: &AppState, template: &str, ctx: &tera::Context) -> Result<Text<String>> {
    let body = state.templates.render(template, ctx).map_err(|e| {
        error!("failed to render {template}: {e}");
        StatusError::internal_server_error()
    })?;
    Ok(Text::Html(body))
}

fn storage_error(e: sea_orm::DbErr) -> StatusError {
    error!("storage operation failed: {e}");
    StatusError::internal_server_error()
}

#[handler]
async fn home(depot: &mut Depot) -> Result<Text<String>> {
    let state = state(depot)?;
    render_page(state, "index.html.tera", &tera::Context::new())
}

#[handler]
async fn survey_form(depot: &mut Depot) -> Result<Text<String>> {
    let state = state(depot)?;
    let mut ctx = tera::Context::new();
    ctx.insert("csrf_token", depot.csrf_token().unwrap_or_default());
    render_page(state, "survey.html.tera", &ctx)
}

#[handler]
async fn submit_survey(req: &mut Request, depot: &mut Depot, res: &mut Response) -> Result<()> {
    let state = state(depot)?;

    // No validation here; an absent field is stored as the empty string.
    let favorite_pizza = req.form::<String>("favorite_pizza").await.unwrap_or_default();

    store::create_survey(&state.db, favorite_pizza)
        .await
        .map_err(storage_error)?;

    res.render(Redirect::other("/survey/results"));
    Ok(())
}

#[handler]
async fn survey_results(depot: &mut Depot) -> Result<Text<String>> {
    let state = state(depot)?;

    let results = store::all_surveys(&state.db).await.map_err(storage_error)?;

    let mut ctx = tera::Context::new();
    ctx.insert("survey_results", &results);
    render_page(state, "survey_results.html.tera", &ctx)
}

#[handler]
async fn reviews_page(depot: &mut Depot) -> Result<Text<String>> {
    let state = state(depot)?;

    let reviews = store::all_reviews(&state.db).await.map_err(storage_error)?;

    let csrf_token = depot.csrf_token().unwrap_or_default();
    let ctx = reviews_context(&reviews, "", "", "", &[], csrf_token);
    render_page(state, "reviews.html.tera", &ctx)
}

#[handler]
async fn submit_review(req: &mut Request, depot: &mut Depot, res: &mut Response) -> Result<()> {
    let state = state(depot)?;

    let name = req.form::<String>("name").await.unwrap_or_default();
    let comment = req.form::<String>("comment").await.unwrap_or_default();
    let rating = req.form::<String>("rating").await.unwrap_or_default();

    match validate_review(&name, &comment, &rating) {
        Ok(input) => {
            store::create_review(&state.db, input)
                .await
                .map_err(storage_error)?;
            res.render(Redirect::other("/reviews"));
        }
        Err(errors) => {
            // The page is shown again with the rejected values filled in.
            let reviews = store::all_reviews(&state.db).await.map_err(storage_error)?;
            let ctx = reviews_context(
                &reviews,
                &name,
                &comment,
                &rating,
                &errors,
                depot.csrf_token().unwrap_or_default(),
            );
            res.render(render_page(state, "reviews.html.tera", &ctx)?);
        }
    }
    Ok(())
}

fn reviews_context(
    reviews: &[review::Model],
    name: &str,
    comment: &str,
    rating: &str,
    errors: &[FieldError],
    csrf_token: &str,
) -> tera::Context {
    let mut ctx = tera::Context::new();
    ctx.insert("reviews", reviews);
    ctx.insert("name", name);
    ctx.insert("comment", comment);
    ctx.insert("rating", rating);
    ctx.insert("errors", errors);
    ctx.insert("csrf_token", csrf_token);
    ctx
}

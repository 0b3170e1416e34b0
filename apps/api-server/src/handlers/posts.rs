//! Blog post CRUD handlers.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost};
use blog_core::error::{DomainError, RepoError};
use blog_shared::dto::{AuthorDto, CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

fn to_author(dto: AuthorDto) -> Author {
    Author::new(dto.first_name, dto.last_name)
}

fn to_response(post: BlogPost) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        author: AuthorDto {
            first_name: post.author.first_name,
            last_name: post.author.last_name,
        },
        created_at: post.created_at.to_rfc3339(),
    }
}

/// Repository `NotFound` names the post it was looking for.
fn post_error(id: Uuid) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound => DomainError::post_not_found(id).into(),
        other => other.into(),
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    tracing::debug!(count = posts.len(), "Listing posts");

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::post_not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = BlogPost::new(req.title, req.content, to_author(req.author))?;
    let saved = state.posts.insert(post).await?;

    tracing::info!(
        request_id = %request_id.as_str(),
        post_id = %saved.id,
        author = %saved.author,
        "Created post"
    );

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", saved.id)))
        .json(to_response(saved)))
}

/// PUT /posts/{id} - full replacement of title, content and author.
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if let Some(body_id) = req.id.as_deref() {
        if Uuid::parse_str(body_id).ok() != Some(id) {
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) must match",
                id, body_id
            )));
        }
    }

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::post_not_found(id))?;

    post.replace(req.title, req.content, to_author(req.author))?;
    state.posts.update(post).await.map_err(post_error(id))?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Updated post");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await.map_err(post_error(id))?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Deleted post");

    Ok(HttpResponse::NoContent().finish())
}

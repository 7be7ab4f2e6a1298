//! Forum services - Post, risposte, voti e profili della community
//!
//! Le mutazioni su risposte e voti pubblicano gli eventi sul change feed con
//! le immagini before/after; score, puntatore di accettazione e reputazione
//! sono stato derivato e li aggiorna solo il trigger worker.

use crate::core::{AppError, AppState};
use crate::dtos::{CastVoteDTO, CreateAnswerDTO, CreatePostDTO, EnrichedPostDTO, PostsQuery};
use crate::entities::{Answer, Post, UserProfile, Vote, VoteTarget};
use crate::repositories::Read;
use crate::stream::{AnswerImage, ChangeEvent, ChangeKind};
use axum::extract::{Json, Path, Query, State};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PostsQuery>,
) -> Result<Json<Vec<Post>>, AppError> {
    let posts = state.post.find_page(query.before_date).await?;
    debug!("Found {} posts", posts.len());
    Ok(Json(posts))
}

#[instrument(skip(state, body))]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePostDTO>,
) -> Result<Json<Post>, AppError> {
    body.validate()?;

    state.profile.ensure(&body.author_sub).await?;
    let post = state.post.create(&body).await?;

    info!(post_id = post.post_id, "Post created");
    Ok(Json(post))
}

#[instrument(skip(state), fields(post_id = %post_id))]
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<Json<EnrichedPostDTO>, AppError> {
    let (post, answers) = futures::try_join!(
        state.post.read(&post_id),
        state.answer.find_many_by_post(&post_id),
    )?;
    let post = post.ok_or_else(|| AppError::not_found("Post not found"))?;

    Ok(Json(EnrichedPostDTO { post, answers }))
}

#[instrument(skip(state, body), fields(post_id = %post_id))]
pub async fn create_answer(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    Json(body): Json<CreateAnswerDTO>,
) -> Result<Json<Answer>, AppError> {
    body.validate()?;

    if state.post.read(&post_id).await?.is_none() {
        return Err(AppError::not_found("Post not found"));
    }

    state.profile.ensure(&body.author_sub).await?;
    let answer = state.answer.create_for_post(&post_id, &body).await?;

    info!(answer_id = answer.answer_id, "Answer created");
    Ok(Json(answer))
}

#[debug_handler]
#[instrument(skip(state), fields(answer_id = %answer_id))]
pub async fn accept_answer(
    State(state): State<Arc<AppState>>,
    Path(answer_id): Path<i64>,
) -> Result<Json<Answer>, AppError> {
    // 1. Leggere la risposta (immagine before)
    // 2. Alzare il flag is_accepted
    // 3. Pubblicare il Modify: puntatore e reputazione li muove il trigger
    let old = state
        .answer
        .read(&answer_id)
        .await?
        .ok_or_else(|| AppError::not_found("Answer not found"))?;

    let new = state.answer.set_accepted(&answer_id, true).await?;

    state.feed.publish(ChangeEvent::Answer {
        kind: ChangeKind::Modify,
        old: Some(AnswerImage::from(&old)),
        new: Some(AnswerImage::from(&new)),
    });

    info!("Answer accepted");
    Ok(Json(new))
}

#[instrument(skip(state), fields(answer_id = %answer_id))]
pub async fn unaccept_answer(
    State(state): State<Arc<AppState>>,
    Path(answer_id): Path<i64>,
) -> Result<Json<Answer>, AppError> {
    let old = state
        .answer
        .read(&answer_id)
        .await?
        .ok_or_else(|| AppError::not_found("Answer not found"))?;

    let new = state.answer.set_accepted(&answer_id, false).await?;

    state.feed.publish(ChangeEvent::Answer {
        kind: ChangeKind::Modify,
        old: Some(AnswerImage::from(&old)),
        new: Some(AnswerImage::from(&new)),
    });

    info!("Answer unaccepted");
    Ok(Json(new))
}

#[debug_handler]
#[instrument(skip(state, body))]
pub async fn cast_vote(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CastVoteDTO>,
) -> Result<Json<Option<Vote>>, AppError> {
    // 1. Validare il DTO; value deve essere +1 o -1
    // 2. Verificare che il target esista
    // 3. Nessun voto esistente → Insert; stesso valore → toggle off (Remove);
    //    valore opposto → switch (Modify)
    // 4. Pubblicare l'evento con le immagini before/after
    body.validate()?;

    if body.value != 1 && body.value != -1 {
        return Err(AppError::bad_request("vote value must be +1 or -1"));
    }

    let target_exists = match body.target_kind {
        VoteTarget::Post => state.post.read(&body.target_id).await?.is_some(),
        VoteTarget::Answer => state.answer.read(&body.target_id).await?.is_some(),
    };
    if !target_exists {
        return Err(AppError::not_found("Vote target not found"));
    }

    state.profile.ensure(&body.voter_sub).await?;

    let existing = state
        .vote
        .find_by_voter_and_target(&body.voter_sub, body.target_kind, &body.target_id)
        .await?;

    let (event, result) = match existing {
        None => {
            let vote = state
                .vote
                .create(&body.voter_sub, body.target_kind, &body.target_id, body.value)
                .await?;
            (
                ChangeEvent::Vote {
                    kind: ChangeKind::Insert,
                    old: None,
                    new: Some(vote.clone()),
                },
                Some(vote),
            )
        }
        Some(vote) if vote.value == body.value => {
            state.vote.delete(&vote.vote_id).await?;
            (
                ChangeEvent::Vote {
                    kind: ChangeKind::Remove,
                    old: Some(vote),
                    new: None,
                },
                None,
            )
        }
        Some(vote) => {
            let updated = state.vote.update_value(&vote.vote_id, body.value).await?;
            (
                ChangeEvent::Vote {
                    kind: ChangeKind::Modify,
                    old: Some(vote),
                    new: Some(updated.clone()),
                },
                Some(updated),
            )
        }
    };

    state.feed.publish(event);
    Ok(Json(result))
}

#[instrument(skip(state), fields(sub = %sub))]
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(sub): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = state
        .profile
        .read(&sub)
        .await?
        .ok_or_else(|| AppError::not_found("Profile not found"))?;

    Ok(Json(profile))
}

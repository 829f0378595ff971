use crate::server::data::comment::{CommentRepository, InsertCommentParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user;
mod get_by_user_with_venue;
mod get_by_venue;
mod ratings_for_venue;
mod update;

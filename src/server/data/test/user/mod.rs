use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_id;
mod find_by_username;
mod get_all;

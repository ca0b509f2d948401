use crate::data::user_link::UserLinkRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod link;
mod unlink;

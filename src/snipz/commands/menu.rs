use crate::commands::CmdResult;
use crate::error::Result;
use crate::menu::build_menu;
use crate::store::{SnippetRepository, StorageBackend};

pub fn run<B: StorageBackend>(repo: &SnippetRepository<B>) -> Result<CmdResult> {
    Ok(CmdResult {
        menu: build_menu(&repo.list()),
        ..Default::default()
    })
}

// Command dispatch: descriptor -> queue service -> rendered lines

use crate::command::{Command, Target};
use crate::render::{self, Line};
use anyhow::Result;
use deq_core::application::{DropRequest, QueueService, ShowRequest};

/// Rendered output plus whether result lines should be hidden
pub struct Output {
    pub lines: Vec<Line>,
    pub silent: bool,
}

/// Run one command against the service
pub fn dispatch(service: &QueueService, command: Command) -> Result<Output> {
    let output = match command {
        Command::Setup { silent } => Output {
            lines: render::setup(&service.setup()?),
            silent,
        },

        Command::Push { request, silent } => {
            let end = request.end;
            let item = service.push(request)?;
            Output {
                lines: render::push(&item, end),
                silent,
            }
        }

        Command::Show { target, dump } => {
            let lines = match target {
                Target::Id(id) => render::show_by_id(&service.show_by_id(id)?, dump)?,
                Target::Position { end, count, all } => {
                    render::show(&service.show(ShowRequest { end, count, all })?, dump)?
                }
            };
            Output {
                lines,
                silent: false,
            }
        }

        Command::Drop { target, silent } => {
            let lines = match target {
                Target::Id(id) => render::drop_by_id(&service.drop_by_id(id)?),
                Target::Position { all: true, .. } => render::drop(&service.empty_all()?),
                Target::Position { end, count, all } => {
                    render::drop(&service.drop(DropRequest { end, count, all })?)
                }
            };
            Output { lines, silent }
        }
    };

    Ok(output)
}

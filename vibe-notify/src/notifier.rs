use std::io::Write;
use std::process::ExitCode;

use vibe_notify_proto::{Notification, PermissionDecision};

use crate::Config;
use crate::deliver::{Dispatch, Request};
use crate::routes::Payload;

#[derive(Debug, thiserror::Error)]
pub(crate) enum NotifyError {
    #[error("Usage: {program} {action} <message>")]
    MissingMessage {
        program: &'static str,
        action: &'static str,
    },
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Everything one invocation will do, worked out before doing any of it
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Plan {
    pub request: Option<Request>,
    pub decision: Option<PermissionDecision>,
}

/// Turns one action into at most one request and at most one stdout line
pub(crate) struct Notifier<D> {
    config: Config,
    dispatch: D,
}

impl<D: Dispatch> Notifier<D> {
    pub fn new(config: Config, dispatch: D) -> Self {
        Self { config, dispatch }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve `action` against the variant's routes. `message` is the rest
    /// of the command line and only matters for custom message actions.
    pub fn plan(&self, action: Option<&str>, message: &[String]) -> Result<Plan, NotifyError> {
        let variant = self.config.variant;
        let Some(route) = action.and_then(|a| variant.route(a)) else {
            tracing::debug!(?action, "no route, nothing to do");
            return Ok(Plan::default());
        };

        let notification = match route.payload {
            Payload::Status(status) => Notification::status(status),
            Payload::Message(text) => Notification::message(text),
            Payload::CallerMessage => {
                let text = message.join(" ");
                if text.is_empty() {
                    return Err(NotifyError::MissingMessage {
                        program: variant.program(),
                        action: route.action,
                    });
                }
                Notification::message(text)
            }
        };

        let request = Request::new(
            self.config.url_for(notification.path()),
            notification.to_body()?,
        );

        Ok(Plan {
            request: Some(request),
            decision: route.ask.then(PermissionDecision::ask),
        })
    }

    /// Carry out the plan. Exits 1 only on a usage error; delivery problems
    /// never reach the caller.
    pub fn run<O, E>(
        &self,
        action: Option<&str>,
        message: &[String],
        stdout: &mut O,
        stderr: &mut E,
    ) -> ExitCode
    where
        O: Write,
        E: Write,
    {
        let plan = match self.plan(action, message) {
            Ok(plan) => plan,
            Err(e @ NotifyError::MissingMessage { .. }) => {
                let _ = writeln!(stderr, "{e}");
                return ExitCode::FAILURE;
            }
            Err(e) => {
                tracing::debug!("{e}");
                return ExitCode::SUCCESS;
            }
        };

        if let Some(request) = plan.request {
            self.dispatch.dispatch(request);
        }

        if let Some(decision) = plan.decision {
            match decision.to_line() {
                Ok(line) => {
                    let _ = writeln!(stdout, "{line}");
                    let _ = stdout.flush();
                }
                Err(e) => tracing::debug!("failed to encode decision: {e}"),
            }
        }

        ExitCode::SUCCESS
    }
}

//! Action keyword to request table, one per variant

use vibe_notify_proto::Status;

use crate::Variant;

/// What goes into the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Payload {
    /// `POST /status` with a fixed status
    Status(Status),
    /// `POST /send` with a fixed message
    Message(&'static str),
    /// `POST /send` with the text given after the action
    CallerMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Route {
    pub action: &'static str,
    pub payload: Payload,
    /// Print `{"permissionDecision":"ask"}` to stdout
    pub ask: bool,
}

const fn route(action: &'static str, payload: Payload) -> Route {
    Route {
        action,
        payload,
        ask: false,
    }
}

const fn ask(action: &'static str, payload: Payload) -> Route {
    Route {
        action,
        payload,
        ask: true,
    }
}

pub(crate) static BLE_ROUTES: &[Route] = &[
    route("working", Payload::Status(Status::Working)),
    route("stop", Payload::Status(Status::Stop)),
    route("waiting", Payload::Status(Status::Waiting)),
    route("notify", Payload::Message("notify")),
    ask("tool", Payload::Message("tool use")),
    route("post", Payload::Message("post tool")),
    ask("ask", Payload::Status(Status::Waiting)),
];

pub(crate) static VIBEKEYS_ROUTES: &[Route] = &[
    route("working", Payload::Status(Status::Working)),
    route("stop", Payload::Status(Status::Stop)),
    route("pending", Payload::Status(Status::Pending)),
    route("notify", Payload::Message("notify")),
    ask("tool", Payload::Message("tool use")),
    route("post", Payload::Message("post tool")),
    ask("ask", Payload::Status(Status::Pending)),
    route("send", Payload::CallerMessage),
    route("msg", Payload::CallerMessage),
];

impl Variant {
    pub(crate) fn routes(&self) -> &'static [Route] {
        match self {
            Variant::Ble => BLE_ROUTES,
            Variant::VibeKeys => VIBEKEYS_ROUTES,
        }
    }

    /// Exact, case-sensitive match. Unknown actions have no route.
    pub(crate) fn route(&self, action: &str) -> Option<&'static Route> {
        self.routes().iter().find(|r| r.action == action)
    }
}

//! Binding a store to a view on a host.

use crate::host::{Container, DomEvent, Host, HostError};
use crate::node::Node;
use composable_todo_core::{action::Action, reducer::Reducer};
use composable_todo_runtime::{Store, StoreError};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Pure render function from state to markup
pub type View<S, A> = fn(&S) -> Node<A>;

/// A store whose snapshots drive a mounted view
///
/// Events routed through [`Connected::dispatch`] become store actions; every
/// new snapshot re-renders the whole tree. A snapshot pointer-equal to the
/// rendered one is skipped.
pub struct Connected<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    store: Store<S, A, E, R>,
    host: Host<A>,
    view: View<S, A>,
    rendered: Arc<S>,
    renders: usize,
}

impl<S, A, E, R> Connected<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: Action + Clone + Send + 'static,
    S: Clone + PartialEq + Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Render the current snapshot and mount it under `container`
    #[must_use]
    pub fn mount(store: Store<S, A, E, R>, container: Container, view: View<S, A>) -> Self {
        let rendered = store.snapshot();
        let mut host = Host::new(container);
        host.mount(view(&rendered));

        Self {
            store,
            host,
            view,
            rendered,
            renders: 1,
        }
    }

    /// Route a user event and send the resulting actions to the store
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the event cannot be routed; nothing is sent
    /// in that case.
    pub async fn dispatch(&mut self, event: DomEvent) -> Result<Arc<S>, HostError> {
        let actions = self.host.handle(&event)?;
        tracing::debug!(event = event.kind(), target = %event.target(), "Dispatching event");

        for action in actions {
            self.store.send(action).await;
        }
        Ok(self.sync())
    }

    /// Send an action directly, bypassing the host
    pub async fn send(&mut self, action: A) -> Arc<S> {
        self.store.send(action).await;
        self.sync()
    }

    /// Decode and send a `{type, payload}` wire record
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] for an unknown or malformed record.
    pub async fn dispatch_record(&mut self, record: &str) -> Result<Arc<S>, StoreError>
    where
        A: DeserializeOwned,
    {
        self.store.send_record(record).await?;
        Ok(self.sync())
    }

    /// Re-render if the store published a snapshot since the last render
    ///
    /// Needed only when other store handles send actions.
    pub fn sync(&mut self) -> Arc<S> {
        let latest = self.store.snapshot();
        if !Arc::ptr_eq(&latest, &self.rendered) {
            self.host.render((self.view)(&latest));
            self.rendered = latest;
            self.renders += 1;
            tracing::trace!(renders = self.renders, "Re-rendered view");
        }
        Arc::clone(&self.rendered)
    }

    /// The snapshot the view currently shows
    #[must_use]
    pub fn snapshot(&self) -> Arc<S> {
        Arc::clone(&self.rendered)
    }

    /// Rendered HTML, container included
    #[must_use]
    pub fn html(&self) -> String {
        self.host.html()
    }

    /// The underlying host
    #[must_use]
    pub const fn host(&self) -> &Host<A> {
        &self.host
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &Store<S, A, E, R> {
        &self.store
    }

    /// How many times the view has been rendered, mount included
    #[must_use]
    pub const fn renders(&self) -> usize {
        self.renders
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::host::Target;
    use crate::node::el;
    use composable_todo_core::{effect::Effect, smallvec, SmallVec};
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    #[serde(tag = "type", content = "payload", rename_all = "camelCase")]
    enum Msg {
        Bump,
        Nothing,
    }

    impl Action for Msg {
        fn action_type(&self) -> &'static str {
            match self {
                Self::Bump => "bump",
                Self::Nothing => "nothing",
            }
        }
    }

    #[derive(Clone)]
    struct Counter;

    impl Reducer for Counter {
        type State = u32;
        type Action = Msg;
        type Environment = ();

        fn reduce(&self, state: &mut u32, action: Msg, _env: &()) -> SmallVec<[Effect<Msg>; 4]> {
            if action == Msg::Bump {
                *state += 1;
            }
            smallvec![Effect::None]
        }
    }

    fn view(count: &u32) -> Node<Msg> {
        el("div")
            .child(el("span").child(count.to_string()))
            .child(el("button").attr("type", "button").on_click(Msg::Bump).child("+"))
            .child(el("button").attr("type", "button").on_click(Msg::Nothing).child("="))
            .into()
    }

    fn connected() -> Connected<u32, Msg, (), Counter> {
        Connected::mount(Store::new(0, Counter, ()), Container::default(), view)
    }

    #[tokio::test]
    async fn test_mount_renders_initial_state() {
        let app = connected();
        assert!(app.html().contains("<span>0</span>"));
        assert_eq!(app.renders(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_rerenders() {
        let mut app = connected();
        let state = app.dispatch(DomEvent::Click(Target::text("+"))).await.unwrap();

        assert_eq!(*state, 1);
        assert!(app.html().contains("<span>1</span>"));
        assert_eq!(app.renders(), 2);
    }

    #[tokio::test]
    async fn test_unchanged_state_skips_render() {
        let mut app = connected();
        app.dispatch(DomEvent::Click(Target::text("="))).await.unwrap();
        assert_eq!(app.renders(), 1);
    }

    #[tokio::test]
    async fn test_unroutable_event_sends_nothing() {
        let mut app = connected();
        let result = app.dispatch(DomEvent::Click(Target::text("-"))).await;

        assert!(result.is_err());
        assert_eq!(*app.store().snapshot(), 0);
    }

    #[tokio::test]
    async fn test_sync_picks_up_other_handles() {
        let store = Store::new(0, Counter, ());
        let mut app = Connected::mount(store.clone(), Container::default(), view);

        store.send(Msg::Bump).await;
        assert!(app.html().contains("<span>0</span>"));

        app.sync();
        assert!(app.html().contains("<span>1</span>"));
    }

    #[tokio::test]
    async fn test_dispatch_record() {
        let mut app = connected();
        assert_eq!(*app.dispatch_record(r#"{"type":"bump"}"#).await.unwrap(), 1);
        assert!(app.dispatch_record(r#"{"type":"boom"}"#).await.is_err());
        assert_eq!(*app.snapshot(), 1);
    }
}

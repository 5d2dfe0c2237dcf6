use futures::{Stream, StreamExt};

use embedview_types::HostState;

use crate::card::Card;
use crate::host::{HostLookup, HostRequest, RenderAdapter};

/// Drive a card from a feed of host state snapshots until the feed ends.
/// Updates apply strictly in order: a resolution in flight for update N
/// finishes before update N+1 is read.
pub async fn drive<E, R, S>(card: &mut Card<E, R>, mut updates: S)
where
    E: HostLookup + HostRequest,
    R: RenderAdapter,
    S: Stream<Item = HostState> + Unpin,
{
    while let Some(state) = updates.next().await {
        card.handle_state_update(&state).await;
    }
}

use std::{
    hash::Hash,
    sync::mpsc::{channel, Receiver, Sender},
};

pub type HandleId = u64;

/// Owner of a backend texture.
/// Not clonable: dropping the handle is the single release of the texture,
/// the backend destroys it on its next `Handles::dropped` drain.
#[derive(Debug)]
pub struct Handle {
    id: HandleId,
    drop_sender: Sender<DropEvent>,
}

impl Handle {
    pub fn id(&self) -> HandleId {
        self.id
    }
}

impl Hash for Handle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Hash::hash(&self.id, state)
    }
}

impl Eq for Handle {}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        let _ = self.drop_sender.send(DropEvent(self.id));
    }
}

#[derive(Debug)]
pub(crate) struct DropEvent(pub HandleId);

/// Allocates handles and collects the ids of dropped ones
pub struct Handles {
    next_id: HandleId,
    sender: Sender<DropEvent>,
    receiver: Receiver<DropEvent>,
}

impl Default for Handles {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Self {
            next_id: 0,
            sender,
            receiver,
        }
    }
}

impl Handles {
    pub fn alloc(&mut self) -> Handle {
        let id = self.next_id;
        self.next_id += 1;
        Handle {
            id,
            drop_sender: self.sender.clone(),
        }
    }

    /// Ids of handles dropped since the last call
    pub fn dropped(&self) -> impl Iterator<Item = HandleId> + '_ {
        self.receiver.try_iter().map(|event| event.0)
    }
}

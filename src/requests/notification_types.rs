use std::fmt;

use serde::{Deserialize, Serialize};

/// One category of server event that can trigger a notification.
///
/// [`NotificationType::bit`] is the value the server uses in its `types` mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    MediaPending,
    MediaApproved,
    MediaAvailable,
    MediaFailed,
    TestNotification,
    MediaDeclined,
    MediaAutoApproved,
}

impl NotificationType {
    pub const ALL: [NotificationType; 7] = [
        NotificationType::MediaPending,
        NotificationType::MediaApproved,
        NotificationType::MediaAvailable,
        NotificationType::MediaFailed,
        NotificationType::TestNotification,
        NotificationType::MediaDeclined,
        NotificationType::MediaAutoApproved,
    ];

    /// The entries offered by the type selector, in display order.
    pub const SELECTABLE: [NotificationType; 6] = [
        NotificationType::MediaPending,
        NotificationType::MediaAutoApproved,
        NotificationType::MediaApproved,
        NotificationType::MediaDeclined,
        NotificationType::MediaAvailable,
        NotificationType::MediaFailed,
    ];

    pub const fn bit(self) -> u32 {
        match self {
            NotificationType::MediaPending => 2,
            NotificationType::MediaApproved => 4,
            NotificationType::MediaAvailable => 8,
            NotificationType::MediaFailed => 16,
            NotificationType::TestNotification => 32,
            NotificationType::MediaDeclined => 64,
            NotificationType::MediaAutoApproved => 128,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            NotificationType::MediaPending => "media-requested",
            NotificationType::MediaApproved => "media-approved",
            NotificationType::MediaAvailable => "media-available",
            NotificationType::MediaFailed => "media-failed",
            NotificationType::TestNotification => "test-notification",
            NotificationType::MediaDeclined => "media-declined",
            NotificationType::MediaAutoApproved => "media-auto-approved",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NotificationType::MediaPending => "Media Requested",
            NotificationType::MediaApproved => "Media Approved",
            NotificationType::MediaAvailable => "Media Available",
            NotificationType::MediaFailed => "Media Failed",
            NotificationType::TestNotification => "Test Notification",
            NotificationType::MediaDeclined => "Media Declined",
            NotificationType::MediaAutoApproved => "Media Automatically Approved",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NotificationType::MediaPending => {
                "Sends a notification when media is requested and requires approval."
            }
            NotificationType::MediaApproved => {
                "Sends a notification when requested media is manually approved."
            }
            NotificationType::MediaAvailable => {
                "Sends a notification when requested media becomes available."
            }
            NotificationType::MediaFailed => {
                "Sends a notification when requested media fails to be added to Radarr or Sonarr."
            }
            NotificationType::TestNotification => "Sent when an administrator tests the agent.",
            NotificationType::MediaDeclined => {
                "Sends a notification when a media request is declined."
            }
            NotificationType::MediaAutoApproved => {
                "Sends a notification when requested media is automatically approved."
            }
        }
    }
}

/// A set of [`NotificationType`]s, carried on the wire as the server's
/// integer bitmask.
///
/// Bits this client does not know about are kept as-is so a save never
/// drops them.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct NotificationTypes(u32);

impl NotificationTypes {
    pub const fn from_bits(bits: u32) -> Self {
        NotificationTypes(bits)
    }

    pub const fn empty() -> Self {
        Self::from_bits(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, ty: NotificationType) -> bool {
        self.0 & ty.bit() != 0
    }

    pub const fn with(self, ty: NotificationType) -> Self {
        NotificationTypes(self.0 | ty.bit())
    }

    pub const fn without(self, ty: NotificationType) -> Self {
        NotificationTypes(self.0 & !ty.bit())
    }

    /// The full replacement set after the user flips one entry.
    pub const fn toggled(self, ty: NotificationType) -> Self {
        if self.contains(ty) {
            self.without(ty)
        } else {
            self.with(ty)
        }
    }

    pub fn iter(self) -> impl Iterator<Item = NotificationType> {
        NotificationType::ALL
            .into_iter()
            .filter(move |ty| self.contains(*ty))
    }
}

impl fmt::Debug for NotificationTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known = self.iter().fold(0, |mask, ty| mask | ty.bit());
        let unknown = self.bits() & !known;

        let mut set = f.debug_set();
        set.entries(self.iter());
        if unknown != 0 {
            set.entry(&format_args!("{:#x}", unknown));
        }
        set.finish()
    }
}

impl FromIterator<NotificationType> for NotificationTypes {
    fn from_iter<I: IntoIterator<Item = NotificationType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(NotificationTypes::empty(), NotificationTypes::with)
    }
}

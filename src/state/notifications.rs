// ============================================================================
// NOTIFICATIONS - Toasts transitorios
// ============================================================================
// Solo el modelo: qué toasts hay visibles y en qué orden. El temporizado de
// auto-cierre lo agenda App con gloo_timers (uno por toast, independientes).
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

impl ToastId {
    pub fn dom_id(&self) -> String {
        format!("toast-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    visible: Vec<Toast>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> Toast {
        self.next_id += 1;
        let toast = Toast {
            id: ToastId(self.next_id),
            message: message.into(),
            kind,
        };
        match kind {
            ToastKind::Success => log::info!("🔔 [TOAST] {}", toast.message),
            ToastKind::Error => log::warn!("🔔 [TOAST] {}", toast.message),
        }
        self.visible.push(toast.clone());
        toast
    }

    /// `false` si ya no estaba visible
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.visible.len();
        self.visible.retain(|toast| toast.id != id);
        self.visible.len() != before
    }

    /// Toasts visibles en orden de inserción
    pub fn visible(&self) -> &[Toast] {
        &self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_coexist_in_insertion_order() {
        let mut center = NotificationCenter::new();
        center.notify("Added 1x Mouse to cart!", ToastKind::Success);
        center.notify("Failed to load orders: HTTP 500", ToastKind::Error);
        let messages: Vec<&str> = center.visible().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["Added 1x Mouse to cart!", "Failed to load orders: HTTP 500"]);
    }

    #[test]
    fn each_toast_is_dismissed_independently() {
        let mut center = NotificationCenter::new();
        let first = center.notify("one", ToastKind::Success);
        let second = center.notify("two", ToastKind::Success);
        let third = center.notify("three", ToastKind::Error);

        assert!(center.dismiss(second.id));
        assert!(!center.dismiss(second.id));
        let ids: Vec<ToastId> = center.visible().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first.id, third.id]);
    }

    #[test]
    fn ids_are_unique_and_dom_safe() {
        let mut center = NotificationCenter::new();
        let a = center.notify("a", ToastKind::Success);
        center.dismiss(a.id);
        let b = center.notify("b", ToastKind::Success);
        assert_ne!(a.id, b.id);
        assert_eq!(b.id.dom_id(), "toast-2");
        assert_eq!(b.kind.css_class(), "success");
    }
}

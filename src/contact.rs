//! Contact form submission simulator.
//!
//! There is no server behind the form; the "send" is a deliberate,
//! self-contained simulation and must stay one. Submission validates the
//! three required fields, then walks the status node through
//! sending → sent with scheduled delays, resetting the form on success.
//! A new submission cancels whatever the previous one still had pending,
//! so overlapping submissions can't fight over the status message.

use log::debug;

use crate::config::ContactConfig;
use crate::events::TimerEvent;
use crate::surface::{NodeId, Surface};
use crate::timer::{TimerHandle, TimerQueue};

pub const VALIDATION_MESSAGE: &str = "Please fill in required fields.";
pub const SENDING_MESSAGE: &str = "Sending message...";
pub const SENT_MESSAGE: &str = "Message sent. Thank you!";

pub struct ContactForm {
    form: NodeId,
    status: NodeId,
    send_timer: Option<TimerHandle>,
    hide_timer: Option<TimerHandle>,
}

impl ContactForm {
    pub fn bind(form: NodeId, status: NodeId) -> Self {
        Self {
            form,
            status,
            send_timer: None,
            hide_timer: None,
        }
    }

    /// Handle a submission. Fields arrive raw and are trimmed here; any
    /// empty field shows the validation warning instead of "sending".
    pub fn submit(
        &mut self,
        name: &str,
        email: &str,
        message: &str,
        config: &ContactConfig,
        surface: &mut impl Surface,
        timers: &mut TimerQueue<TimerEvent>,
        now_ms: u64,
    ) {
        self.cancel_pending(timers);

        let complete =
            !name.trim().is_empty() && !email.trim().is_empty() && !message.trim().is_empty();
        if !complete {
            debug!("contact: submission rejected, missing required fields");
            self.show_status(VALIDATION_MESSAGE, &config.warn_color, surface);
            self.hide_timer = Some(
                timers.schedule(now_ms + config.invalid_hide_ms, TimerEvent::ContactHideStatus),
            );
            return;
        }

        debug!("contact: simulating send");
        self.show_status(SENDING_MESSAGE, &config.ok_color, surface);
        self.send_timer =
            Some(timers.schedule(now_ms + config.send_delay_ms, TimerEvent::ContactSendDone));
    }

    /// Simulated send finished: success message, reset the fields, and
    /// schedule the message's auto-hide.
    pub fn on_send_done(
        &mut self,
        config: &ContactConfig,
        surface: &mut impl Surface,
        timers: &mut TimerQueue<TimerEvent>,
        now_ms: u64,
    ) {
        self.send_timer = None;
        surface.set_text(self.status, SENT_MESSAGE);
        surface.reset_form(self.form);
        self.hide_timer =
            Some(timers.schedule(now_ms + config.sent_hide_ms, TimerEvent::ContactHideStatus));
    }

    /// Visibility window elapsed: hide the status message.
    pub fn on_hide(&mut self, surface: &mut impl Surface) {
        self.hide_timer = None;
        surface.set_hidden(self.status, true);
    }

    fn show_status(&self, text: &str, color: &str, surface: &mut impl Surface) {
        surface.set_hidden(self.status, false);
        surface.set_text(self.status, text);
        surface.set_color(self.status, color);
    }

    fn cancel_pending(&mut self, timers: &mut TimerQueue<TimerEvent>) {
        for pending in [self.send_timer.take(), self.hide_timer.take()]
            .into_iter()
            .flatten()
        {
            timers.cancel(pending);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordedPage;

    const FORM: NodeId = NodeId(0);
    const STATUS: NodeId = NodeId(1);

    fn bind() -> ContactForm {
        ContactForm::bind(FORM, STATUS)
    }

    fn cfg() -> ContactConfig {
        ContactConfig::default()
    }

    #[test]
    fn missing_field_shows_warning() {
        let mut page = RecordedPage::new(1200);
        let mut timers = TimerQueue::new();
        let mut form = bind();

        form.submit("Ada", "ada@example.com", "", &cfg(), &mut page, &mut timers, 0);

        assert!(!page.is_hidden(STATUS));
        assert_eq!(page.text(STATUS), Some(VALIDATION_MESSAGE));
        assert_eq!(page.color(STATUS), Some("#f8b4a6"));
        // No send was simulated.
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.drain_due(2400), vec![TimerEvent::ContactHideStatus]);
        assert!(page.form_resets.is_empty());
    }

    #[test]
    fn whitespace_only_field_is_treated_as_empty() {
        let mut page = RecordedPage::new(1200);
        let mut timers = TimerQueue::new();
        let mut form = bind();

        form.submit("  \t ", "ada@example.com", "Hi", &cfg(), &mut page, &mut timers, 0);
        assert_eq!(page.text(STATUS), Some(VALIDATION_MESSAGE));
    }

    #[test]
    fn warning_auto_hides() {
        let mut page = RecordedPage::new(1200);
        let mut timers = TimerQueue::new();
        let mut form = bind();
        form.submit("", "", "", &cfg(), &mut page, &mut timers, 0);

        assert!(timers.drain_due(2399).is_empty());
        assert_eq!(timers.drain_due(2400), vec![TimerEvent::ContactHideStatus]);
        form.on_hide(&mut page);
        assert!(page.is_hidden(STATUS));
    }

    #[test]
    fn complete_submission_walks_sending_then_sent() {
        let mut page = RecordedPage::new(1200);
        let mut timers = TimerQueue::new();
        let mut form = bind();

        form.submit("Ada", "ada@example.com", "Hello!", &cfg(), &mut page, &mut timers, 0);
        assert_eq!(page.text(STATUS), Some(SENDING_MESSAGE));
        assert_eq!(page.color(STATUS), Some("#cfe9d3"));

        assert_eq!(timers.drain_due(900), vec![TimerEvent::ContactSendDone]);
        form.on_send_done(&cfg(), &mut page, &mut timers, 900);
        assert_eq!(page.text(STATUS), Some(SENT_MESSAGE));
        assert_eq!(page.form_resets, vec![FORM]);

        assert_eq!(timers.drain_due(900 + 2600), vec![TimerEvent::ContactHideStatus]);
        form.on_hide(&mut page);
        assert!(page.is_hidden(STATUS));
    }

    #[test]
    fn fields_are_trimmed_not_rejected_for_padding() {
        let mut page = RecordedPage::new(1200);
        let mut timers = TimerQueue::new();
        let mut form = bind();
        form.submit("  Ada  ", " a@b.c ", " Hi ", &cfg(), &mut page, &mut timers, 0);
        assert_eq!(page.text(STATUS), Some(SENDING_MESSAGE));
    }

    #[test]
    fn resubmission_cancels_pending_send() {
        let mut page = RecordedPage::new(1200);
        let mut timers = TimerQueue::new();
        let mut form = bind();

        form.submit("Ada", "a@b.c", "First", &cfg(), &mut page, &mut timers, 0);
        // Resubmit with a missing field before the first send completes.
        form.submit("Ada", "a@b.c", "", &cfg(), &mut page, &mut timers, 100);

        // The old send is gone; only the warning's hide timer remains.
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.drain_due(100 + 2400), vec![TimerEvent::ContactHideStatus]);
        assert_eq!(page.text(STATUS), Some(VALIDATION_MESSAGE));
        assert!(page.form_resets.is_empty());
    }

    #[test]
    fn resubmission_cancels_stale_hide() {
        let mut page = RecordedPage::new(1200);
        let mut timers = TimerQueue::new();
        let mut form = bind();

        form.submit("", "", "", &cfg(), &mut page, &mut timers, 0);
        // New valid submission before the warning hides: the stale hide
        // must not blank the "Sending" message mid-flight.
        form.submit("Ada", "a@b.c", "Hi", &cfg(), &mut page, &mut timers, 2000);

        // Past the old warning's 2400ms deadline, nothing fires; the only
        // pending timer is the new send at 2900.
        assert!(timers.drain_due(2400).is_empty());
        assert_eq!(timers.drain_due(2900), vec![TimerEvent::ContactSendDone]);
        assert_eq!(page.text(STATUS), Some(SENDING_MESSAGE));
        assert!(!page.is_hidden(STATUS));
    }
}

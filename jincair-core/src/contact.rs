//! Contact-form submission lifecycle.

/// Status of one submission attempt, driving the inline status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Sending,
    Success,
    /// The endpoint answered with a non-success HTTP status.
    Failure,
    /// The request never completed.
    NetworkError,
}

impl SubmitStatus {
    /// User-facing status line. The site is Chinese-language.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Sending => "正在发送...",
            Self::Success => "感谢您的留言，我们已收到您的讯息！",
            Self::Failure => "提交失败，请稍后再试。",
            Self::NetworkError => "网络错误，请检查您的网络连接。",
        }
    }

    /// CSS color of the status line.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Sending => "#555",
            Self::Success => "green",
            Self::Failure | Self::NetworkError => "red",
        }
    }

    /// The form is cleared only after a confirmed success; failed attempts
    /// keep the user's input for resubmission.
    #[must_use]
    pub const fn clears_form(self) -> bool {
        matches!(self, Self::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_success_clears_the_form() {
        assert!(SubmitStatus::Success.clears_form());
        assert!(!SubmitStatus::Sending.clears_form());
        assert!(!SubmitStatus::Failure.clears_form());
        assert!(!SubmitStatus::NetworkError.clears_form());
    }

    #[test]
    fn error_outcomes_render_in_red() {
        assert_eq!(SubmitStatus::Failure.color(), "red");
        assert_eq!(SubmitStatus::NetworkError.color(), "red");
        assert_eq!(SubmitStatus::Success.color(), "green");
        assert_eq!(SubmitStatus::Sending.color(), "#555");
    }

    #[test]
    fn every_status_has_a_message() {
        for status in [
            SubmitStatus::Sending,
            SubmitStatus::Success,
            SubmitStatus::Failure,
            SubmitStatus::NetworkError,
        ] {
            assert!(!status.message().is_empty());
        }
    }
}

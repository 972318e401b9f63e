// ABOUTME: Message templates for every console line the reporter writes.
// ABOUTME: Templates use positional {0}, {1}, {2} placeholders.

use std::fmt;

/// Identifies one line template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    Server,
    NodeOnline,
    NodeOffline,
    ToolJdk,
    Plugin,
}

impl MessageId {
    pub const fn template(self) -> &'static str {
        match self {
            MessageId::Server => "{0} v{1}",
            MessageId::NodeOnline => "{0}: online with {1} executor(s) - {2}",
            MessageId::NodeOffline => "{0}: offline with {1} executor(s) - {2}",
            MessageId::ToolJdk => "{0} at {1}",
            MessageId::Plugin => "{0} v{1} - {2}",
        }
    }
}

/// Render the template for `id`, substituting `{N}` with `args[N]`.
///
/// A placeholder without a matching argument, or one that is not a plain
/// index, is copied through unchanged.
pub fn render(id: MessageId, args: &[&dyn fmt::Display]) -> String {
    let template = id.template();
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let index = &after[..close];
        match index.parse::<usize>().ok().and_then(|i| args.get(i)) {
            Some(arg) => out.push_str(&arg.to_string()),
            None => {
                out.push('{');
                out.push_str(index);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

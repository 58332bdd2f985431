use serde::{Deserialize, Serialize};

/// The reference Java implementation shown by the code panel. Step
/// records point into this text via [`CodeLine::line_number`].
pub const JAVA_CODE: &str = "public class Solution {
    public boolean hasCycle(ListNode head) {
        if (head == null || head.next == null) {
            return false;
        }
        ListNode slow = head;
        ListNode fast = head.next;
        while (slow != fast) {
            if (fast == null || fast.next == null) {
                return false;
            }
            slow = slow.next;
            fast = fast.next.next;
        }
        return true;
    }
}";

/// Which line of the reference algorithm a step corresponds to.
///
/// Display mapping only; control flow never branches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeLine {
    /// Method entry.
    MethodStart,
    /// `if (head == null || head.next == null)`.
    NullCheck,
    /// `return false` inside the null/size check.
    ReturnFalseEmpty,
    /// `ListNode slow = head`.
    InitSlow,
    /// `ListNode fast = head.next`.
    InitFast,
    /// `while (slow != fast)`.
    WhileCheck,
    /// `if (fast == null || fast.next == null)`.
    FastNullCheck,
    /// `return false` after the fast pointer ran off the end.
    ReturnFalseNoCycle,
    /// `slow = slow.next`.
    SlowNext,
    /// `fast = fast.next.next`.
    FastNext,
    /// `return true`.
    ReturnTrue,
}

impl CodeLine {
    /// 1-based line number within [`JAVA_CODE`].
    pub fn line_number(self) -> u32 {
        match self {
            CodeLine::MethodStart => 2,
            CodeLine::NullCheck => 3,
            CodeLine::ReturnFalseEmpty => 4,
            CodeLine::InitSlow => 6,
            CodeLine::InitFast => 7,
            CodeLine::WhileCheck => 8,
            CodeLine::FastNullCheck => 9,
            CodeLine::ReturnFalseNoCycle => 10,
            CodeLine::SlowNext => 12,
            CodeLine::FastNext => 13,
            CodeLine::ReturnTrue => 15,
        }
    }
}

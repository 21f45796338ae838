//! Template catalogue: one message template per error code.

use crate::ErrorCode;

impl ErrorCode {
    /// The message template for this code.
    ///
    /// Exhaustive, so every code has exactly one template.
    pub fn template(self) -> &'static str {
        match self {
            // Runtime
            ErrorCode::E1001 => {
                "The \"{0}\" browser disconnected. If you did not close the browser yourself, \
                 it may have hung or lost its network connection."
            }
            ErrorCode::E1002 => {
                "Unable to establish one or more of the specified browser connections."
            }
            ErrorCode::E1003 => "Could not find test files at the following location: \"{0}\".",
            ErrorCode::E1004 => "Cannot prepare tests due to the following error:\n\n{0}",
            ErrorCode::E1005 => {
                "Cannot parse a test source file in the raw format at \"{0}\" \
                 due to the following error:\n\n{1}"
            }
            ErrorCode::E1006 => "Timeout expired for a time limited promise",
            ErrorCode::E1007 => {
                "The \"{0}\" method of the \"{1}\" reporter produced an uncaught error. \
                 Error details:\n{2}"
            }
            ErrorCode::E1008 => "Cannot establish a connection to the browser at {0}:{1}.",
            // API
            ErrorCode::E2001 => {
                "{#instantiationCallsiteName} code is expected to be specified as a function, \
                 but {0} was passed."
            }
            ErrorCode::E2002 => {
                "{#instantiationCallsiteName} code is expected to be specified as a function \
                 or string, but {0} was passed."
            }
            ErrorCode::E2003 => {
                "{#instantiationCallsiteName} cannot implicitly resolve the test run in the \
                 context of which it should be executed. If you need to call \
                 {#instantiationCallsiteName} from a Node.js API callback, bind the test \
                 controller manually via the `.with({ boundTestRun: t })` method of \
                 {#instantiationCallsiteName} first."
            }
            ErrorCode::E2004 => "{0} is expected to be a {1}, but it was {2}.",
            ErrorCode::E2005 => {
                "You cannot call the \"{0}\" method more than once. \
                 Specify an array of parameters instead."
            }
            ErrorCode::E2006 => "An error occurred in the \"{0}\" method of a request hook:\n\n{1}",
            ErrorCode::E2007 => {
                "The \"{0}\" option of the skipJsErrors method is expected to be {1}, \
                 but it was {2}."
            }
            // Aggregate
            ErrorCode::E9001 => "{0}",
        }
    }
}

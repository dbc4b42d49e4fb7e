use rand::rngs::OsRng;
use rand::Rng;

use crate::modules::account::application::domain::Handle;
use crate::modules::account::application::ports::outgoing::HandleGenerator;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const HANDLE_BODY_LEN: usize = 10;

/// Draws `@` + 10 lowercase alphanumerics from the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomHandleGenerator;

impl HandleGenerator for RandomHandleGenerator {
    fn generate(&self) -> Handle {
        let mut rng = OsRng;
        let body: String = (0..HANDLE_BODY_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();

        Handle::from_generated(format!("@{body}"))
    }
}

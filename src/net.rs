//! Low level framing for the DHT wire protocol.
//!
//! Payloads travel as netstrings (`<len>:<payload>,`) over TCP. The request
//! dispatch that belongs behind the framing is not built yet;
//! [handle_connection] currently echoes every payload straight back to the
//! peer.

use std::io::{BufReader, Read, Write};
use std::net::TcpStream;

use bytes::Bytes;
use tracing::{debug, trace};

use crate::{Error, Result};

/// Upper bound on a single frame's declared payload length.
pub const MAX_FRAME_LENGTH: usize = 65536;

/// Encode a payload as a netstring frame.
pub fn encode_frame(payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + 8);
    frame.extend_from_slice(payload.len().to_string().as_bytes());
    frame.push(b':');
    frame.extend_from_slice(payload);
    frame.push(b',');
    frame
}

/// Read one netstring frame from `reader`.
///
/// Returns `Ok(None)` on a clean end of stream before any length digit.
pub fn read_frame(reader: &mut impl Read) -> Result<Option<Bytes>> {
    let mut len: usize = 0;
    let mut digits = 0;
    let mut byte = [0u8; 1];

    loop {
        if reader.read(&mut byte)? == 0 {
            return if digits == 0 {
                Ok(None)
            } else {
                Err(Error::MalformedFrame("end of stream inside frame length"))
            };
        }

        match byte[0] {
            b'0'..=b'9' => {
                len = len * 10 + (byte[0] - b'0') as usize;
                digits += 1;

                if len > MAX_FRAME_LENGTH {
                    return Err(Error::FrameTooLarge(len, MAX_FRAME_LENGTH));
                }
            }
            b':' if digits > 0 => break,
            _ => return Err(Error::MalformedFrame("invalid frame length")),
        }
    }

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)?;

    reader.read_exact(&mut byte)?;
    if byte[0] != b',' {
        return Err(Error::MalformedFrame("missing trailing comma"));
    }

    Ok(Some(Bytes::from(payload)))
}

/// Serve one peer connection, reading frames until the peer disconnects.
///
/// TODO: unpack the payload and dispatch the decoded request; needs the
/// message types and the routing table, neither of which exist yet. Until
/// then every payload is echoed back verbatim.
pub fn handle_connection(stream: TcpStream) -> Result<()> {
    let peer = stream.peer_addr()?;
    debug!(context = "net_connection", ?peer, "Peer connected");

    let mut reader = BufReader::new(stream.try_clone()?);
    let mut writer = stream;

    while let Some(payload) = read_frame(&mut reader)? {
        trace!(
            context = "net_frame_receiving",
            ?peer,
            len = payload.len(),
            "Received frame"
        );

        writer.write_all(&encode_frame(&payload))?;
    }

    debug!(context = "net_connection", ?peer, "Peer disconnected");
    Ok(())
}

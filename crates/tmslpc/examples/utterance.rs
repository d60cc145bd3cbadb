//! Pack a short utterance for the TMS5220, then read it back frame by frame.
//!
//! Run with: `cargo run -p tmslpc --example utterance`

use tmslpc::chip::TMS5220;
use tmslpc::frame::{Frame, FrameReader, FrameWriter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let utterance = [
        Frame::Voiced {
            energy: 33,
            pitch: 60,
            k: [-412, -18, -150, 100, -50, 80, -30, 40, 20, -10],
        },
        Frame::Repeated {
            energy: 23,
            pitch: 62,
        },
        Frame::Unvoiced {
            energy: 11,
            k: [226, -138, 60, -40],
        },
        Frame::Silent,
        Frame::Stop,
    ];

    let mut writer = FrameWriter::new(&TMS5220);
    writer.write_all(&utterance);
    println!(
        "wrote {} frames in {} bits",
        writer.frames_written(),
        writer.bit_len()
    );
    let wire = writer.finish();
    println!("{} bytes: {:02x?}", wire.len(), wire.as_ref());

    let mut reader = FrameReader::new(&wire, &TMS5220);
    while let Some(frame) = reader.read_frame()? {
        println!("{:<8} {:?}", frame.kind(), frame);
    }
    println!("consumed {} bits", reader.bits_consumed());

    Ok(())
}

use std::env;
use std::path::Path;

use anyhow::{anyhow, bail, Context};
use linux_embedded_hal::I2cdev;

use siv12x::catalog::{FrameFormat, PixelCode};
use siv12x::{
    ControlId, SensorConfig, SensorModel, SensorDriver, Siv120dDriver, Siv121cDriver,
    SmbusTransport,
};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 || args.len() > 5 {
        bail!("Three arguments required: [120d|121c] <I2C bus> <sensor address> [clock MHz]");
    }
    let address: u8 = if args[3].starts_with("0x") {
        let hex_digits = args[3].split_at(2).1;
        u8::from_str_radix(hex_digits, 16)?
    } else {
        args[3].parse()?
    };
    let clock_speed: u32 = match args.get(4) {
        Some(clock) => clock.parse()?,
        None => 0,
    };
    let config = SensorConfig {
        clock_speed,
        ..SensorConfig::default()
    };
    let bus_path = Path::new(&args[2]);
    let bus = I2cdev::new(bus_path)
        .with_context(|| format!("Unable to open I2C bus {}", bus_path.display()))?;
    let transport = SmbusTransport::new(bus, address);
    match args[1].as_ref() {
        "120d" => {
            let sensor = Siv120dDriver::new(transport, config).map_err(|e| anyhow!("{}", e))?;
            exercise(sensor)
        }
        "121c" => {
            let sensor = Siv121cDriver::new(transport, config).map_err(|e| anyhow!("{}", e))?;
            exercise(sensor)
        }
        _ => bail!("The first argument must be either 120d or 121c"),
    }
}

fn exercise<Model: SensorModel>(
    mut sensor: SensorDriver<Model, SmbusTransport<I2cdev>>,
) -> anyhow::Result<()> {
    println!("Found a {}", sensor.model_name());
    sensor.init().map_err(|e| anyhow!("{}", e))?;
    let mut index = 0;
    while let Ok(format) = sensor.enumerate_format(index) {
        println!("Format {}: {:?} ({:?})", index, format.code, format.colorspace);
        index += 1;
    }
    let mut index = 0;
    while let Ok((width, height)) = sensor.enumerate_frame_size(index) {
        println!("Frame size {}: {}x{}", index, width, height);
        index += 1;
    }
    let requested = FrameFormat::new(PixelCode::Yuyv8_2x8.into(), 640, 480);
    let negotiated = sensor
        .set_format(&requested)
        .map_err(|e| anyhow!("{}", e))?;
    println!(
        "Negotiated {}x{} in {:?}",
        negotiated.width, negotiated.height, negotiated.colorspace
    );
    sensor.set_frame_rate(15).map_err(|e| anyhow!("{}", e))?;
    println!("Frame rate: {} fps", sensor.frame_rate());
    for id in [ControlId::Brightness, ControlId::Saturation, ControlId::Hue] {
        let info = sensor.query_control(id)?;
        let value = sensor.get_control(id).map_err(|e| anyhow!("{}", e))?;
        println!("{:?} = {} (range {:?})", id, value, info.range());
    }
    Ok(())
}

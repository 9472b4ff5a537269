//! Four days of a small, hand-picked slice of the historical series.

pub const CONFIRMED: &str = concat!(
    "Province/State,Country/Region,Lat,Long,3/17/20,3/18/20,3/19/20,3/20/20\n",
    ",Italy,43.0,12.0,\"31,506\",\"35,713\",\"41,035\",\"47,021\"\n",
    "Hubei,Mainland China,30.9756,112.2707,\"67,799\",\"67,800\",\"67,800\",\"67,800\"\n",
    "Beijing,Mainland China,40.1824,116.4142,456,468,491,504\n",
    "France,France,46.2276,2.2137,\"7,652\",\"9,043\",\"10,871\",\"12,612\"\n",
    "Reunion,France,-21.1151,55.5364,9,12,14,28\n",
    ",\"Korea, South\",36.0,128.0,\"8,320\",\"8,413\",\"8,565\",\"8,652\"\n",
    "Washington,US,47.4009,-121.4905,\"1,076\",\"1,014\",\"1,376\",\"1,524\"\n",
    "New York,US,42.1657,-74.9481,\"1,706\",\"2,495\",\"5,365\",\"8,310\"\n",
);

pub const DEATHS: &str = concat!(
    "Province/State,Country/Region,Lat,Long,3/17/20,3/18/20,3/19/20,3/20/20\n",
    ",Italy,43.0,12.0,\"2,503\",\"2,978\",\"3,405\",\"4,032\"\n",
    "Hubei,Mainland China,30.9756,112.2707,\"3,111\",\"3,122\",\"3,130\",\"3,133\"\n",
    "Beijing,Mainland China,40.1824,116.4142,8,8,8,8\n",
    "France,France,46.2276,2.2137,148,243,450,450\n",
    "Reunion,France,-21.1151,55.5364,0,0,0,0\n",
    ",\"Korea, South\",36.0,128.0,81,84,91,94\n",
    "Washington,US,47.4009,-121.4905,55,66,74,83\n",
    "New York,US,42.1657,-74.9481,13,16,34,42\n",
);

pub const RECOVERED: &str = concat!(
    "Province/State,Country/Region,Lat,Long,3/17/20,3/18/20,3/19/20,3/20/20\n",
    ",Italy,43.0,12.0,\"2,941\",\"4,025\",\"4,440\",\"5,129\"\n",
    "Hubei,Mainland China,30.9756,112.2707,\"56,003\",\"57,682\",\"58,382\",\"58,946\"\n",
    "Beijing,Mainland China,40.1824,116.4142,369,369,380,381\n",
    "France,France,46.2276,2.2137,12,12,12,12\n",
    "Reunion,France,-21.1151,55.5364,0,0,0,0\n",
    ",\"Korea, South\",36.0,128.0,\"1,407\",\"1,540\",\"1,540\",\"1,540\"\n",
    "Washington,US,47.4009,-121.4905,1,1,1,1\n",
    "New York,US,42.1657,-74.9481,0,0,0,0\n",
);

/// Date labels carried by every fixture feed.
pub fn date_labels() -> Vec<&'static str> {
    CONFIRMED
        .lines()
        .next()
        .unwrap_or_default()
        .split(',')
        .skip(4)
        .collect()
}

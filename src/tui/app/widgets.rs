pub mod candle_chart;
